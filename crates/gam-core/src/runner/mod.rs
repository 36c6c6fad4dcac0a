//! Seam between the core and the `git` executable.

pub mod command_output;
pub mod error;
pub mod git_cli;

use crate::runner::error::RunnerResult;

/// Access to the global (per-user) git configuration.
pub trait GitConfig {
    /// Current value of `key`, empty when unset.
    fn read_global_value(&self, key: &str) -> RunnerResult<String>;

    /// Set `key` to exactly one value, dropping every previous value.
    fn set_global_value(&self, key: &str, value: &str) -> RunnerResult<()>;

    /// Remove every value of `key`. A key that is already absent is not an error.
    fn unset_global_value(&self, key: &str) -> RunnerResult<()>;
}

impl<T: GitConfig + ?Sized> GitConfig for &T {
    fn read_global_value(&self, key: &str) -> RunnerResult<String> {
        (**self).read_global_value(key)
    }

    fn set_global_value(&self, key: &str, value: &str) -> RunnerResult<()> {
        (**self).set_global_value(key, value)
    }

    fn unset_global_value(&self, key: &str) -> RunnerResult<()> {
        (**self).unset_global_value(key)
    }
}
