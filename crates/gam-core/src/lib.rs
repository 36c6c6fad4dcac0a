//! Identity switching for the global git configuration.
//!
//! [`ConfigStore`] persists the saved identities, [`IdentitySwitcher`] applies
//! one of them to `git config --global` through a [`GitConfig`] runner.

pub mod error;
pub mod identity;
pub mod runner;
pub mod ssh;
pub mod store;
pub mod switcher;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use identity::{identity::Identity, identity_store::IdentityStore};
pub use runner::{
    GitConfig, command_output::CommandOutput, error::RunnerError, error::RunnerResult,
    git_cli::GitCli,
};
pub use ssh::{
    KeyGenerator, discovery::list_private_keys, error::KeyError, error::KeyResult,
    generate::generate_key, key_algorithm::KeyAlgorithm, ssh_keygen_cli::SshKeygenCli,
};
pub use store::{ConfigStore, error::StoreError, error::StoreResult};
pub use switcher::{
    IdentitySwitcher, apply_step::ApplyStep, error::SwitchError, error::SwitchResult,
    global_status::GlobalStatus, ssh_command::ssh_command_for,
};

pub const KEY_USER_NAME: &str = "user.name";
pub const KEY_USER_EMAIL: &str = "user.email";
pub const KEY_SSH_COMMAND: &str = "core.sshCommand";

const STORE_FILENAME: &str = "accounts.json";
const BACKUP_DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
