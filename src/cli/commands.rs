//! Command dispatch: the thin I/O shell around the domain layer.

use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Node, TreeBuilder, TreeInput, TreeStatistics};
use crate::util::path::expand_path;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Stats {
            file,
            parallel,
            modulus,
        }) => {
            let mut settings = Settings::load(cli.config.as_deref())?;
            if *parallel {
                settings.parallel = true;
            }
            if modulus.is_some() {
                settings.product_modulus = *modulus;
            }
            _stats(file.as_deref(), &settings)
        }
        Some(Commands::Tree { file }) => _tree(file.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(cli.config.as_deref()),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Read the tree description from `file`, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => {
            let path = expand_path(path);
            std::fs::read_to_string(&path)
                .map_err(|e| CliError::io(format!("read {}", path.display()), e))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::io("read stdin", e))?;
            Ok(text)
        }
    }
}

/// Parse and build in one step; any malformed part fails the whole build.
pub fn build_tree(text: &str) -> CliResult<Node> {
    let input = TreeInput::parse(text)?;
    Ok(TreeBuilder::new().build(&input)?)
}

pub fn compute_statistics(root: &Node, settings: &Settings) -> TreeStatistics {
    if settings.parallel {
        TreeStatistics::compute_parallel(root, settings.product_modulus)
    } else {
        TreeStatistics::compute(root, settings.product_modulus)
    }
}

#[instrument(skip(settings))]
fn _stats(file: Option<&Path>, settings: &Settings) -> CliResult<()> {
    debug!(?settings, "stats");
    let root = build_tree(&read_input(file)?)?;
    if settings.show_tree {
        output::header("tree");
        eprintln!("{}", root);
    }
    for value in compute_statistics(&root, settings).lines() {
        output::info(&value);
    }
    Ok(())
}

#[instrument]
fn _tree(file: Option<&Path>) -> CliResult<()> {
    let root = build_tree(&read_input(file)?)?;
    output::info(&root);
    Ok(())
}

#[instrument]
fn _config_show(config_file: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config_file)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("no config directory available on this platform"),
    }
    Ok(())
}
