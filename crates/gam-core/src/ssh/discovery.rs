//! Finds private keys in a directory such as `~/.ssh`.

use crate::{KeyError, KeyResult};

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, trace};

/// Files that live in `~/.ssh` but are never keys.
const NON_KEY_FILES: &[&str] = &[
    "known_hosts",
    "known_hosts.old",
    "config",
    "authorized_keys",
    "environment",
];

/// Public keys and PuTTY keys.
const NON_KEY_EXTENSIONS: &[&str] = &["pub", "ppk"];

const PRIVATE_KEY_MARKER: &str = "PRIVATE KEY";
const PEM_BEGIN_MARKER: &str = "-----BEGIN";

/// Lists the private keys directly inside `dir`, sorted by path.
///
/// A missing directory yields an empty list.
pub fn list_private_keys(dir: &Path) -> KeyResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Key directory {dir:?} does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(KeyError::read_dir(dir.to_path_buf(), e)),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| KeyError::read_dir(dir.to_path_buf(), e))?;
        let path = entry.path();

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(true) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if NON_KEY_FILES.contains(&name.as_str()) {
            trace!("Skipping known non-key file {name}");
            continue;
        }

        if has_excluded_extension(&path) {
            trace!("Skipping {name} by extension");
            continue;
        }

        if has_private_key_header(&path) {
            keys.push(path);
        }
    }

    keys.sort();
    debug!("Found {} private keys in {dir:?}", keys.len());
    Ok(keys)
}

fn has_excluded_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| NON_KEY_EXTENSIONS.contains(&ext.as_str()))
}

/// Sniffs the first line for a PEM/OpenSSH private key header.
fn has_private_key_header(path: &Path) -> bool {
    let Ok(file) = fs::File::open(path) else {
        return false;
    };

    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return false;
    }

    first_line.contains(PRIVATE_KEY_MARKER) || first_line.starts_with(PEM_BEGIN_MARKER)
}
