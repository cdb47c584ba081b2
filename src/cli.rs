//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "file_explorer",
    version,
    about = "Browse and manage the local filesystem from the terminal"
)]
pub struct Cli {
    /// Start in this directory instead of the configured one / the cwd.
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Settings file to use instead of the per-user default.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `file_explorer=trace`. `RUST_LOG` wins.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Do not ask before deleting files or directories.
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands. Without one, the interactive menu starts.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List the directory (directories first).
    List,
    /// Recursively search entry names for a substring.
    Search { term: String },
    /// Show details for one entry.
    Details { name: String },
    /// Show permissions, or replace them with an octal MODE such as 644.
    Perms { name: String, mode: Option<String> },
    /// Write a default settings file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["file_explorer", "search", "report", "-C", "/tmp"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.command, Some(Command::Search { term: "report".into() }));
    }

    #[test]
    fn perms_mode_is_optional() {
        let cli = Cli::try_parse_from(["file_explorer", "perms", "f"]).unwrap();
        assert_eq!(cli.command, Some(Command::Perms { name: "f".into(), mode: None }));
        let cli = Cli::try_parse_from(["file_explorer", "perms", "f", "600"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Perms { name: "f".into(), mode: Some("600".into()) })
        );
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["file_explorer", "-y"]).unwrap();
        assert!(cli.yes);
        assert!(cli.command.is_none());
    }
}
