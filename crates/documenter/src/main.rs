use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use crossterm::style::Stylize;
use documenter::cli::Cli;
use documenter::logging::{
    get_log_level_max,
    initialize_logging,
};
use eyre::Result;
use tracing::metadata::LevelFilter;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let parsed = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return Ok(ExitCode::from(err.exit_code().try_into().unwrap_or(2)));
        },
    };

    let verbose = parsed.verbose > 0;
    let _log_guard = match initialize_logging(parsed.verbose) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("{} failed to initialize logging: {err}", "warning:".bold().yellow());
            None
        },
    };

    match parsed.execute() {
        Ok(exit_code) => Ok(exit_code),
        Err(err) => {
            if verbose || get_log_level_max() > LevelFilter::INFO {
                eprintln!("{} {err:?}", "error:".bold().red());
            } else {
                eprintln!("{} {err}", "error:".bold().red());
            }
            Ok(ExitCode::FAILURE)
        },
    }
}
