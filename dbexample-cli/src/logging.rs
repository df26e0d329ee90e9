//! Logger setup.
//!
//! Logs go to stderr (or --logfile) so that stdout carries only rows.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target, WriteStyle};

use crate::CliError;

fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global logger. `RUST_LOG` overrides the level picked from
/// the flags.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let env = Env::default().default_filter_or(default_level(verbose, quiet));
    let mut builder = Builder::from_env(env);

    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}
