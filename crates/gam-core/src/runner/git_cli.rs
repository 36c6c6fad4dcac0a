//! [`GitConfig`] backed by the `git` executable.

use crate::GitConfig;
use crate::runner::{command_output::CommandOutput, error::RunnerResult};

use std::path::{Path, PathBuf};

use log::debug;

/// `git config --get` exits 1 when the key is not set.
const EXIT_KEY_NOT_FOUND: i32 = 1;
/// `git config --unset-all` exits 5 when there is nothing to unset.
const EXIT_NOTHING_TO_UNSET: i32 = 5;
/// Redirects `--global` to another file (git 2.32+).
const GLOBAL_CONFIG_ENV: &str = "GIT_CONFIG_GLOBAL";

#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    global_file: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            global_file: None,
        }
    }

    /// Manage `file` instead of git's default global config file.
    pub fn with_global_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.global_file = Some(file.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn global_file(&self) -> Option<&Path> {
        self.global_file.as_deref()
    }

    fn git(&self, args: &[&str]) -> RunnerResult<CommandOutput> {
        match &self.global_file {
            Some(file) => CommandOutput::run_with_env(
                &self.program,
                args,
                &[(GLOBAL_CONFIG_ENV, file.as_os_str())],
            ),
            None => CommandOutput::run(&self.program, args),
        }
    }
}

impl GitConfig for GitCli {
    fn read_global_value(&self, key: &str) -> RunnerResult<String> {
        let output = self.git(&["config", "--global", "--get", key])?;

        if output.code == Some(EXIT_KEY_NOT_FOUND) && output.combined().is_empty() {
            debug!("Global {key} is not set");
            return Ok(String::new());
        }

        let output = output.into_result()?;
        Ok(output.stdout.trim().to_string())
    }

    fn set_global_value(&self, key: &str, value: &str) -> RunnerResult<()> {
        self.git(&["config", "--global", "--replace-all", key, value])?
            .into_result()?;
        Ok(())
    }

    fn unset_global_value(&self, key: &str) -> RunnerResult<()> {
        let output = self.git(&["config", "--global", "--unset-all", key])?;

        if output.code == Some(EXIT_NOTHING_TO_UNSET) {
            debug!("Global {key} was already unset");
            return Ok(());
        }

        output.into_result()?;
        Ok(())
    }
}
