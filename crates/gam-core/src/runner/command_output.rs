use crate::runner::error::{RunnerError, RunnerResult};

use std::ffi::OsStr;
use std::process::Command;

use log::debug;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Program and arguments, for diagnostics
    pub command: String,
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Run `program` with `args` to completion, capturing its output.
    ///
    /// Only a failure to start the process is an error here; a non-zero
    /// exit is reported through `code`.
    pub fn run(program: &str, args: &[&str]) -> RunnerResult<Self> {
        Self::run_with_env(program, args, &[])
    }

    /// Like [`CommandOutput::run`] with extra environment variables for the child.
    pub fn run_with_env(
        program: &str,
        args: &[&str],
        envs: &[(&str, &OsStr)],
    ) -> RunnerResult<Self> {
        let command = Self::describe(program, args);
        debug!("Running {command}");

        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.envs(envs.iter().copied());
        hide_console_window(&mut cmd);

        let output = cmd
            .output()
            .map_err(|e| RunnerError::spawn(command.clone(), e))?;

        Ok(Self {
            command,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// stdout followed by stderr, trimmed.
    pub fn combined(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined.trim().to_string()
    }

    /// Turn a non-zero exit into a [`RunnerError::CommandFailed`].
    #[track_caller]
    pub fn into_result(self) -> RunnerResult<Self> {
        if self.success() {
            return Ok(self);
        }

        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => String::from("terminated by signal"),
        };
        let output = self.combined();
        Err(RunnerError::command_failed(self.command, status, output))
    }

    fn describe(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(windows)]
fn hide_console_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_cmd: &mut Command) {}
