mod cli;
mod commands;
mod config;
mod logging;
mod model;
mod source;

use std::process::ExitCode;

use clap::Parser;
use lin_render::TerminalContext;
use tracing::debug;

use cli::Cli;
use config::{RealEnv, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli, &RealEnv);
    logging::init_logging(&settings.log_filter);

    let ctx = settings.terminal_context(TerminalContext::detect());
    debug!(?ctx, ?settings, "starting");

    match commands::run(cli.command, &settings, ctx) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
