//! dbexample CLI
//!
//! Command-line interface over the Employee table: a plain query, a
//! prepared query re-run per key, and a two-row transactional insert.

mod cli_types;
mod commands;
mod config;
mod dispatch;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::Cli;
use config::Settings;
use dispatch::Invocation;

pub(crate) use error::CliError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return report(&CliError::from(e)),
    };

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        return report(&e);
    }

    let settings = Settings::resolve(cli.database);

    let result = Invocation::try_from(cli.command).and_then(|invocation| {
        let stdout = std::io::stdout();
        dispatch::run(&invocation, &settings.database, &mut stdout.lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Print `err` to stderr (plus the usage text for usage errors) and pick
/// the exit code.
fn report(err: &CliError) -> ExitCode {
    log::debug!("{:?}", err);
    eprintln!(
        "{} {}",
        "error:".if_supports_color(Stderr, |t| t.red()),
        err,
    );
    if err.is_usage() {
        eprintln!();
        eprintln!("{}", cli_types::usage_text());
    }
    ExitCode::from(err.exit_code())
}
