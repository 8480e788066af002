use clap::{Args, Parser, Subcommand};

use crate::model::FilterMode;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start in this view (all, completed, active, removed)
    #[arg(long, global = true)]
    pub filter: Option<FilterMode>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script of list commands and print the resulting view
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct BatchArgs {
    /// Script file (stdin when omitted or `-`)
    pub script: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
