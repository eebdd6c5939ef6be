//! Command-line argument parsing.

/// Options that shape the TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Start on the product list instead of the user list
    pub products: bool,
    /// Start with the dark theme
    pub dark: bool,
    /// Override the API base URL
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI (default)
    Run(CliOptions),
}

/// Parse command-line arguments (program name first).
///
/// Unknown flags are ignored.
///
/// ```
/// use listdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["listdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--products" => options.products = true,
            "--dark" => options.dark = true,
            "--base-url" => {
                if let Some(url) = args.next() {
                    options.base_url = Some(url);
                }
            }
            other => {
                if let Some(url) = other.strip_prefix("--base-url=") {
                    options.base_url = Some(url.to_string());
                }
            }
        }
    }

    CliCommand::Run(options)
}
