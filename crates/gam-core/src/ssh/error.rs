use crate::RunnerError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Key file '{name}' already exists {location}")]
    AlreadyExists { name: String, location: ErrorLocation },

    #[error("Invalid key file name '{name}': {message} {location}")]
    InvalidName {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported key algorithm '{value}' {location}")]
    InvalidAlgorithm { value: String, location: ErrorLocation },

    #[error("Failed to read key directory {path}: {source} {location}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to create key directory {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Key generation failed: {0}")]
    Generate(#[from] RunnerError),
}

impl KeyError {
    #[track_caller]
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_algorithm(value: impl Into<String>) -> Self {
        Self::InvalidAlgorithm {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read_dir(path: PathBuf, source: std::io::Error) -> Self {
        Self::ReadDir {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type KeyResult<T> = std::result::Result<T, KeyError>;
