//! # Mortar CLI

use clap::Parser;
use mortar_cli::{commands, init_logging, load_runtime_config, Cli};
use mortar_engine::{log_error, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_runtime_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(cli.verbose, &config.logging) {
        eprintln!("Warning: {}", e);
    }
    if cli.verbose > 1 {
        eprintln!("{}", logging::get_system_diagnostics());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::run(&cli.command, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!(e.code(), "Command failed", "error" => &e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
