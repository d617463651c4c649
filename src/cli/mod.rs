// CLI module for authgate

use clap::Parser;
use std::path::PathBuf;

/// authgate - HTTP bridge gateway for an external authentication service
#[derive(Parser, Debug)]
#[command(name = "authgate", version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(long, env = "AUTHGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
