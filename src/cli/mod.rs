//! Command-line interface.
//!
//! Parsing happens before the terminal is touched so `--version` and
//! `--help` print to a normal terminal:
//!
//! ```ignore
//! use listdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let options = match run_cli_command(command) {
//!     Some(options) => options,
//!     None => return Ok(()),
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{usage, VERSION};

/// Handle informational commands.
///
/// Returns the options to start the TUI with, or `None` if the command was
/// fully handled (version or help was printed).
pub fn run_cli_command(command: CliCommand) -> Option<CliOptions> {
    match command {
        CliCommand::Version => {
            println!("listdeck {}", VERSION);
            None
        }
        CliCommand::Help => {
            println!("{}", usage());
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
