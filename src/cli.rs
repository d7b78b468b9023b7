//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Persistent terminal task list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the task store file (overrides config)
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Write logs to this file (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
