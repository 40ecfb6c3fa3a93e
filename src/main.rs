//! taskpath CLI entry point

use clap::Parser;
use std::process::ExitCode;
use taskpath::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    log::debug!("taskpath v{}", env!("CARGO_PKG_VERSION"));

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
