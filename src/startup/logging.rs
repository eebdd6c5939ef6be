//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to a file instead.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use super::AppConfig;

/// `<cache dir>/listdeck/listdeck.log`, if the platform has a cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("listdeck").join("listdeck.log"))
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber. Returns the log path, or `None` when no
/// location is available (logging is then disabled).
pub fn init_logging(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_file.clone().or_else(default_log_path) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .wrap_err_with(|| format!("invalid log filter {:?}", config.log_filter))?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("installing tracing subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "logging started");
    Ok(Some(path))
}
