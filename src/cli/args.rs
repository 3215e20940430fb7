//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report coverage gaps between language dictionaries
//! - `init`: Initialize a lingua configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lingua", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check language dictionaries for coverage gaps
    Check(CheckCommand),
    /// Write a default .linguarc.json to the current directory
    Init,
}

#[derive(Debug, Clone, Args)]
pub struct CheckCommand {
    /// Messages directory holding one <code>.json per language
    /// (overrides config file)
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Default language code (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
