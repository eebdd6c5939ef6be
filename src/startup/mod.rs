//! Process startup: configuration and logging.

pub mod config;
pub mod logging;

pub use config::{AppConfig, DEFAULT_LOG_FILTER};
pub use logging::{default_log_path, init_logging};
