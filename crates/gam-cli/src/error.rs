use gam_config::ConfigError;
use gam_core::{CoreError, KeyError, StoreError, SwitchError};

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Switch(#[from] SwitchError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("No identity with id {id} {location}")]
    UnknownIdentity { id: String, location: ErrorLocation },

    #[error("SSH key not found: {} {location}", path.display())]
    KeyNotFound { path: PathBuf, location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn unknown_identity(id: impl Into<String>) -> Self {
        Self::UnknownIdentity {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn key_not_found(path: impl Into<PathBuf>) -> Self {
        Self::KeyNotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What the user can do about it, printed under the error.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Store(e) | Self::Switch(SwitchError::Store(e)) => Some(e.recovery_hint()),
            Self::Switch(SwitchError::Step { .. }) => Some(
                "Earlier settings may already be applied. \
                 Check `git config --global --list` and retry the switch.",
            ),
            Self::Switch(SwitchError::UnknownIdentity { .. }) | Self::UnknownIdentity { .. } => {
                Some("Run `gam list` to see saved identity ids.")
            }
            Self::Key(KeyError::AlreadyExists { .. }) => {
                Some("Pick another file name or remove the existing key first.")
            }
            Self::Key(KeyError::InvalidAlgorithm { .. }) => {
                Some("Supported algorithms: ed25519, rsa, ecdsa.")
            }
            Self::Config(_) => Some("Check config.toml and the GAM_* environment variables."),
            _ => None,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
