//! Sextant CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{Level, LevelFilter, debug, error, info, log_enabled};

use sextant_cli::{Args, error_adapter::to_reportables};

/// Exit code for failures that stop the run before any diagram is checked.
const EXIT_FATAL: i32 = 2;

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Sextant");
    debug!(args:?; "Parsed arguments");

    match sextant_cli::run(&args) {
        Ok(result) => {
            info!(exit_code = result.exit_code(); "Completed");
            process::exit(result.exit_code());
        }
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();

            for reportable in to_reportables(&err) {
                let mut writer = String::new();
                if reporter.render_report(&mut writer, &reportable).is_err() {
                    writer = err.to_string();
                }

                // Fatal errors are shown even when logging is off.
                if log_enabled!(Level::Error) {
                    error!("{writer}");
                } else {
                    eprintln!("{writer}");
                }
            }

            process::exit(EXIT_FATAL);
        }
    }
}
