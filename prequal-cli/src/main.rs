use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use prequal_cli::app;
use prequal_cli::cli::Cli;
use prequal_cli::config::AppConfig;
use prequal_cli::logging::init_logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let config = AppConfig::load(cli.config.as_deref())?;
    debug!(affordability = ?config.affordability, "effective affordability settings");

    let mut stdout = io::stdout().lock();
    let success = app::run(&cli.command, &config, &mut stdout)?;
    stdout.flush()?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
