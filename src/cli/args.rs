use crate::constants::{verbosity, DEFAULT_CONFIG_FILENAME};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Render Terraform and Ansible artifacts from a single YAML config.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the config and render the template tree into an output directory.
    Render(RenderArgs),
    /// Load the config and print the resolved settings.
    Validate(ValidateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Directory holding the `terraform/` (and optional `ansible/`) templates.
    #[arg(short, long, value_name = "DIR")]
    pub templates: PathBuf,

    /// Destination directory for rendered files.
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Render into an existing output directory.
    #[arg(short, long)]
    pub force: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
