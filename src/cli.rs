use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// droidsweep - classify Android packages and plan bloatware removal
#[derive(Parser)]
#[command(name = "droidsweep")]
#[command(about = "Classify installed Android packages and generate removal commands")]
#[command(version)]
pub struct Cli {
    /// Path to a curator-exported JSON reference database.
    ///
    /// When omitted the compiled-in database is used.
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Output machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a package list and print the grouped report
    Detect {
        /// Input file with one package per line (omit to read stdin).
        /// Lines may carry the `package:` prefix from `pm list packages`.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Classify a package list and emit the removal command sequence
    Commands {
        /// Input file with one package per line (omit to read stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Select every detected package, not just auto-selected bloatware
        #[arg(long, conflicts_with = "only")]
        all: bool,

        /// Select only these packages (repeatable), clearing the defaults
        #[arg(long)]
        only: Vec<String>,

        /// Additionally select these packages (repeatable)
        #[arg(long)]
        select: Vec<String>,

        /// Deselect these packages before synthesis (repeatable)
        #[arg(long)]
        deselect: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_detect_with_input() {
        let result = Cli::try_parse_from(["droidsweep", "detect", "--input", "packages.txt"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Detect { input } => {
                assert_eq!(input.unwrap().to_str().unwrap(), "packages.txt");
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_cli_detect_stdin_default() {
        let result = Cli::try_parse_from(["droidsweep", "detect"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Detect { input } => assert!(input.is_none()),
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_cli_commands_with_selection_overrides() {
        let result = Cli::try_parse_from([
            "droidsweep",
            "commands",
            "--select",
            "com.a.b",
            "--deselect",
            "com.c.d",
            "--deselect",
            "com.e.f",
        ]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Commands {
                select, deselect, all, ..
            } => {
                assert!(!all);
                assert_eq!(select, vec!["com.a.b"]);
                assert_eq!(deselect, vec!["com.c.d", "com.e.f"]);
            }
            _ => panic!("Expected Commands command"),
        }
    }

    #[test]
    fn test_cli_all_conflicts_with_only() {
        let result = Cli::try_parse_from([
            "droidsweep",
            "commands",
            "--all",
            "--only",
            "com.a.b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_database_flag() {
        let result =
            Cli::try_parse_from(["droidsweep", "detect", "--database", "/tmp/db.json"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert_eq!(cli.database.unwrap().to_str().unwrap(), "/tmp/db.json");
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["droidsweep"]);
        assert!(result.is_err());
    }
}
