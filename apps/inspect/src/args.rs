//! # CLI Arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tpost-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Write and inspect framed tradepost user profiles")]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON). `TPOST__` environment variables override it.
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a sample profile to a file
    Sample {
        /// Destination file
        out: PathBuf,
        /// Account id of the sample profile
        #[arg(long, default_value = "sample-user")]
        account_id: String,
    },
    /// Decode a profile file and print it
    Show {
        /// Framed profile file
        input: PathBuf,
        /// Print the whole profile as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}
