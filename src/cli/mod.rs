// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the credential file
    #[arg(long, short, env = "PASSFORGE_STORE")]
    pub store: Option<PathBuf>,

    /// Command to execute; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
