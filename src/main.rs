use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod defaults;
mod encoding;
mod error;
mod key;
mod util;

use crate::cli::Cli;
use crate::commands::ExtractOptions;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let opts = ExtractOptions {
        public_key: cli.public_key,
        secret_key: cli.secret_key,
        cols: cli.cols,
    };

    let sections = commands::run(&opts)?;
    commands::emit(sections, cli.out)?;
    Ok(())
}
