//! Main entry point for the lingua CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::args::{Arguments, CheckCommand, Command};
use super::exit_status::ExitStatus;
use super::report;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::coverage::check_coverage;
use crate::loader::load_registry;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let config = Config::load(Path::new("."))?;
    let messages_dir = cmd
        .messages_dir
        .unwrap_or_else(|| PathBuf::from(&config.messages_dir));
    let default_language = cmd
        .default_language
        .unwrap_or(config.default_language);

    let loaded = load_registry(&messages_dir, &default_language)?;
    report::print_warnings(&loaded.warnings);

    if cmd.verbose {
        for language in loaded.registry.languages() {
            eprintln!("loaded dictionary for '{}'", language);
        }
    }

    let gaps = check_coverage(&loaded.registry);
    if gaps.is_empty() {
        report::print_success(loaded.registry.languages().len());
        Ok(ExitStatus::Success)
    } else {
        report::report(&gaps, &default_language);
        Ok(ExitStatus::Failure)
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
