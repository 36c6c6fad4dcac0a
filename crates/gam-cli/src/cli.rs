use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gam")]
#[command(about = "Switch the global git identity between saved accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding accounts.json (overrides config)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Directory scanned for private keys (overrides config)
    #[arg(long, global = true)]
    pub ssh_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
