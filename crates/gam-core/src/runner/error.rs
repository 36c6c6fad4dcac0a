use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// A subprocess could not be started or exited unsuccessfully.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to start `{command}`: {source} {location}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("`{command}` failed ({status}): {output} {location}")]
    CommandFailed {
        command: String,
        status: String,
        /// Combined stdout and stderr of the failed command
        output: String,
        location: ErrorLocation,
    },
}

impl RunnerError {
    #[track_caller]
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn command_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status: status.into(),
            output: output.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Combined output of the failed command, if it ran at all.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } => Some(output),
            Self::Spawn { .. } => None,
        }
    }
}

pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
