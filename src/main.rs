mod arith_cmd;
mod cli;
mod config;
mod convert;
mod fields_cmd;
mod inspect_cmd;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::KalendsConfig;
use crate::convert::OutputFormat;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = KalendsConfig::load(cli.config.as_deref())?;
    let mut settings = convert::build_settings(&config)?;
    if cli.json {
        settings.format = OutputFormat::Json;
    }
    info!(calendar = %config.calendar.id, "settings resolved");

    let format = settings.format;
    let text = match &cli.command {
        Command::Inspect(args) => output::render(&inspect_cmd::inspect(args, &settings)?, format)?,
        Command::Add(args) => output::render(&arith_cmd::add(args, &settings)?, format)?,
        Command::Until(args) => output::render(&arith_cmd::until(args, &settings)?, format)?,
        Command::FromFields(args) => {
            output::render(&fields_cmd::from_fields(args, &settings)?, format)?
        }
        Command::Week(args) => output::render(&inspect_cmd::week(args, &settings)?, format)?,
    };
    println!("{text}");
    Ok(())
}
