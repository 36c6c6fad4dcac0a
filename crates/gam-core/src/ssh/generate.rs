use crate::{KeyAlgorithm, KeyError, KeyGenerator, KeyResult};

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

/// Generates `dir/name` through `generator`, refusing to overwrite.
///
/// `dir` is created (owner-only on unix) when missing.
pub fn generate_key<K: KeyGenerator + ?Sized>(
    generator: &K,
    dir: &Path,
    name: &str,
    email: &str,
    algorithm: KeyAlgorithm,
) -> KeyResult<PathBuf> {
    validate_key_name(name)?;

    if !dir.exists() {
        create_private_dir(dir)?;
    }

    let path = dir.join(name);
    if path.exists() {
        return Err(KeyError::already_exists(name));
    }

    let generated = generator.generate_key_pair(&path, email, algorithm)?;
    info!("Generated {algorithm} key {generated:?}");
    Ok(generated)
}

/// Key names are bare file names inside the key directory.
#[track_caller]
fn validate_key_name(name: &str) -> KeyResult<()> {
    if name.trim().is_empty() {
        return Err(KeyError::invalid_name(name, "must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(KeyError::invalid_name(name, "must be a file name"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(KeyError::invalid_name(name, "must not contain path separators"));
    }
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> KeyResult<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
        .map_err(|e| KeyError::dir_creation(dir.to_path_buf(), e))
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> KeyResult<()> {
    fs::create_dir_all(dir).map_err(|e| KeyError::dir_creation(dir.to_path_buf(), e))
}
