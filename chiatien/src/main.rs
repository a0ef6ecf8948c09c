#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use bootstrap::{AppBuilder, AppConfig};
use chiatien_application::LedgerService;
use chiatien_infrastructure::SystemClock;
use clap::Parser;
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_data_file(cli.data.clone());
    bootstrap::init_logging();

    match run(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = ?err, "Command failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<String> {
    let store = AppBuilder::build(config);
    let service = LedgerService::new(&store, &SystemClock);
    commands::execute(&service, cli.command)
        .with_context(|| format!("ledger {}", config.data_file.display()))
}
