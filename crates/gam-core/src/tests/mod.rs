mod switcher;

use crate::{ConfigStore, GitConfig, Identity, RunnerError, RunnerResult};

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use tempfile::TempDir;

/// In-memory global git config. Keys hold a list of values, like git's
/// multi-valued keys, so replace-all and unset-all are observable.
#[derive(Default)]
pub(crate) struct FakeGitConfig {
    values: RefCell<HashMap<String, Vec<String>>>,
    failing_keys: RefCell<HashSet<String>>,
    fail_reads: bool,
    calls: RefCell<Vec<String>>,
}

impl FakeGitConfig {
    pub(crate) fn with_identity(name: &str, email: &str) -> Self {
        let fake = Self::default();
        fake.add_value(crate::KEY_USER_NAME, name);
        fake.add_value(crate::KEY_USER_EMAIL, email);
        fake
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Append a value, the way `git config --add` would.
    pub(crate) fn add_value(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn values(&self, key: &str) -> Vec<String> {
        self.values.borrow().get(key).cloned().unwrap_or_default()
    }

    /// Make every write and unset of `key` fail.
    pub(crate) fn fail_on(&self, key: &str) {
        self.failing_keys.borrow_mut().insert(key.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn check(&self, key: &str) -> RunnerResult<()> {
        if self.failing_keys.borrow().contains(key) {
            return Err(RunnerError::command_failed(
                format!("git config --global {key}"),
                "exit status 255",
                format!("error: could not lock config file for {key}"),
            ));
        }
        Ok(())
    }
}

impl GitConfig for FakeGitConfig {
    fn read_global_value(&self, key: &str) -> RunnerResult<String> {
        self.calls.borrow_mut().push(format!("get {key}"));
        if self.fail_reads {
            return Err(RunnerError::command_failed(
                "git config --global --get",
                "exit status 128",
                "fatal: not a git config",
            ));
        }
        Ok(self.values(key).last().cloned().unwrap_or_default())
    }

    fn set_global_value(&self, key: &str, value: &str) -> RunnerResult<()> {
        self.calls.borrow_mut().push(format!("set {key}"));
        self.check(key)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), vec![value.to_string()]);
        Ok(())
    }

    fn unset_global_value(&self, key: &str) -> RunnerResult<()> {
        self.calls.borrow_mut().push(format!("unset {key}"));
        self.check(key)?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

pub(crate) fn temp_store() -> (TempDir, ConfigStore) {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path());
    (temp, store)
}

pub(crate) fn identity(id: &str, name: &str) -> Identity {
    Identity::new(id, name, &format!("{name}@example.com"), "").unwrap()
}
