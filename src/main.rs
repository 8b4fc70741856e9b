mod cli;
mod config;
mod convert;
mod impact_cmd;
mod logging;
mod output;
mod smooth_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Impact(args) => impact_cmd::run(args),
        Command::Smooth(args) => smooth_cmd::run(args),
    }
}
