//! Private key discovery and key pair generation.

pub mod discovery;
pub mod error;
pub mod generate;
pub mod key_algorithm;
pub mod ssh_keygen_cli;

use crate::ssh::{error::KeyResult, key_algorithm::KeyAlgorithm};

use std::path::{Path, PathBuf};

/// Creates a new key pair on disk.
pub trait KeyGenerator {
    /// Write a private key to `path` (and its public half next to it).
    /// Returns the private key path.
    fn generate_key_pair(
        &self,
        path: &Path,
        email: &str,
        algorithm: KeyAlgorithm,
    ) -> KeyResult<PathBuf>;
}
