use crate::runner::command_output::CommandOutput;
use crate::{KeyAlgorithm, KeyGenerator, KeyResult};

use std::path::{Path, PathBuf};

/// [`KeyGenerator`] that shells out to `ssh-keygen` with an empty passphrase.
///
/// Call through [`crate::generate_key`], which guards against overwriting.
#[derive(Debug, Clone)]
pub struct SshKeygenCli {
    program: String,
}

impl Default for SshKeygenCli {
    fn default() -> Self {
        Self::new("ssh-keygen")
    }
}

impl SshKeygenCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl KeyGenerator for SshKeygenCli {
    fn generate_key_pair(
        &self,
        path: &Path,
        email: &str,
        algorithm: KeyAlgorithm,
    ) -> KeyResult<PathBuf> {
        let path_arg = path.to_string_lossy();
        CommandOutput::run(
            &self.program,
            &[
                "-t",
                algorithm.as_str(),
                "-C",
                email,
                "-f",
                &path_arg,
                "-N",
                "",
            ],
        )?
        .into_result()?;

        Ok(path.to_path_buf())
    }
}
