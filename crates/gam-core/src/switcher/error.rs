use crate::{ApplyStep, CoreError, RunnerError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    /// One write to the global configuration failed. Earlier steps stay applied.
    #[error("Failed to {step}: {source} {location}")]
    Step {
        step: ApplyStep,
        #[source]
        source: RunnerError,
        location: ErrorLocation,
    },

    #[error("No identity with id {id} {location}")]
    UnknownIdentity { id: String, location: ErrorLocation },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SwitchError {
    #[track_caller]
    pub fn step(step: ApplyStep, source: RunnerError) -> Self {
        Self::Step {
            step,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_identity(id: impl Into<String>) -> Self {
        Self::UnknownIdentity {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The apply step that failed, if this is a step failure.
    pub fn failed_step(&self) -> Option<ApplyStep> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type SwitchResult<T> = std::result::Result<T, SwitchError>;
