//! Command-line argument parsing for the bookshelf CLI.

/// Flags that adjust the TUI's startup configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url <url>`
    pub api_url: Option<String>,
    /// `--data-dir <dir>`
    pub data_dir: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Clear the stored session and exit
    Logout(CliOverrides),
    /// Run the TUI application (default)
    RunTui(CliOverrides),
    /// Unrecognized or incomplete arguments
    Invalid(String),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: bookshelf [OPTIONS]

Options:
      --api-url <URL>   Backend base URL (env: BOOKSHELF_API_URL)
      --data-dir <DIR>  Directory for the session file and log (env: BOOKSHELF_DATA_DIR)
      --logout          Clear the stored session and exit
  -V, --version         Print version
  -h, --help            Print help";

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win wherever they appear. Values may be given as
/// `--flag value` or `--flag=value`.
///
/// ```
/// use bookshelf::cli::args::{parse_args, CliCommand, CliOverrides};
///
/// let args = vec!["bookshelf".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
///
/// let args = vec!["bookshelf".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui(CliOverrides::default()));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut logout = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => logout = true,
            "--api-url" | "--data-dir" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                if value.is_empty() {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                }
                if flag == "--api-url" {
                    overrides.api_url = Some(value);
                } else {
                    overrides.data_dir = Some(value);
                }
            }
            _ => return CliCommand::Invalid(format!("unknown argument: {}", arg)),
        }
    }

    if logout {
        CliCommand::Logout(overrides)
    } else {
        CliCommand::RunTui(overrides)
    }
}
