#![allow(clippy::print_stdout)]

pub mod args;
pub mod commands;
pub mod config;

use crate::args::{Cli, Command};
use crate::config::load_config;
use anyhow::Context;
use clap::Parser;
use tpost_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(cli.config.as_deref()).context("Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.log)?;

    let output = match cli.command {
        Command::Sample { out, account_id } => commands::sample(&out, &account_id, &cfg.codec)?,
        Command::Show { input, json } => commands::show(&input, json, &cfg.codec)?,
    };
    println!("{output}");

    Ok(())
}
