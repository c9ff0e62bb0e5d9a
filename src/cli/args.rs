//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build colored trees from edge lists and aggregate them with visitors
#[derive(Parser, Debug)]
#[command(name = "treevis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(long, global = true, env = "TREEVIS_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print sum of leaves, product of red internal nodes and fancy result
    Stats {
        /// Tree description (default: stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Run the visitors in parallel (overrides config)
        #[arg(short, long)]
        parallel: bool,
        /// Reduce the red-node product modulo this value (overrides config)
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
        modulus: Option<i64>,
    },

    /// Show the built tree
    Tree {
        /// Tree description (default: stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show global config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_with_overrides() {
        let cli = Cli::try_parse_from(["treevis", "-dd", "stats", "tree.txt", "-p", "-m", "7"])
            .unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Stats {
                file,
                parallel,
                modulus,
            }) => {
                assert_eq!(file, Some(PathBuf::from("tree.txt")));
                assert!(parallel);
                assert_eq!(modulus, Some(7));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(Cli::try_parse_from(["treevis", "stats", "-m", "0"]).is_err());
    }
}
