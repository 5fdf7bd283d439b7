//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ridership - reports over the CTA L daily ridership database
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ridership SQLite database
    #[arg(short, long, env = "RIDERSHIP_DB", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never offer to plot results
    #[arg(long)]
    pub no_plot: bool,

    /// Log query activity to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive command menu (default)
    Shell,
    /// Print dataset statistics and exit
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_shell() {
        let args = Args::try_parse_from(["ridership"]).unwrap();
        assert_eq!(args.command, None);
        assert!(!args.no_plot);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parses_flags_and_subcommand() {
        let args = Args::try_parse_from([
            "ridership",
            "--database",
            "cta.db",
            "--no-plot",
            "-v",
            "stats",
        ])
        .unwrap();
        assert_eq!(args.database, Some(PathBuf::from("cta.db")));
        assert!(args.no_plot);
        assert!(args.verbose);
        assert_eq!(args.command, Some(Commands::Stats));
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Args::try_parse_from(["ridership", "import"]).is_err());
    }
}
