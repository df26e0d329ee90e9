use std::path::PathBuf;

use clap::error::ErrorKind;
use dbexample_db::DbError;
use thiserror::Error;

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Malformed invocation; reported together with the usage text.
    #[error("{0}")]
    Usage(String),

    /// A well-formed command failed while running.
    #[error("Error while executing command {command}: {source}")]
    Operation {
        command: &'static str,
        #[source]
        source: FailureCause,
    },

    /// The --logfile target could not be opened.
    #[error("Could not open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What went wrong inside a command.
#[derive(Debug, Error)]
pub(crate) enum FailureCause {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn operation(command: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Operation {
            command,
            source: cause.into(),
        }
    }

    pub(crate) fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Process exit code for this error.
    pub(crate) fn exit_code(&self) -> u8 {
        1
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand | ErrorKind::MissingSubcommand => {
                Self::usage("no command given")
            }
            _ => {
                // Keep clap's message, drop its trailing usage hint.
                let rendered = err.render().to_string();
                let message = rendered
                    .lines()
                    .take_while(|line| !line.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::usage(message.trim_start_matches("error: "))
            }
        }
    }
}
