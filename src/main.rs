// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use char_freq::{app, cli};
use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    app::init_logging(args.verbose);

    let config = match cli::build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    match app::run(&config) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::warn!("{} of {} sources failed", summary.failed, summary.failed + summary.analyzed);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
