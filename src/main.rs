//! Warehouse CLI

use std::{io, process::ExitCode};

use crate::config::Config;

mod cli;
mod config;
mod observability;

fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        report(&error);

        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();

    match config.command.run(&config.storage.file, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);

            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the CLI reports failures to the user on stderr"
)]
fn report(error: &dyn std::error::Error) {
    eprintln!("error: {error}");
}
