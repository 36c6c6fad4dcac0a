//! Keeps the global git identity and the identity store in step.

pub mod apply_step;
pub mod error;
pub mod global_status;
pub mod ssh_command;

use crate::{
    ApplyStep, ConfigStore, GitConfig, GlobalStatus, Identity, IdentityStore, KEY_SSH_COMMAND,
    KEY_USER_EMAIL, KEY_USER_NAME, ssh_command_for,
    switcher::error::{SwitchError, SwitchResult},
};

use log::{debug, info, warn};

/// Applies identities to the global git configuration and persists the
/// active pointer through a [`ConfigStore`].
pub struct IdentitySwitcher<G: GitConfig> {
    git: G,
    store: ConfigStore,
    import_attempted: bool,
}

impl<G: GitConfig> IdentitySwitcher<G> {
    pub fn new(git: G, store: ConfigStore) -> Self {
        Self {
            git,
            store,
            import_attempted: false,
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.store
    }

    /// Loads the store and runs the first-run import.
    pub fn load(&mut self) -> SwitchResult<IdentityStore> {
        let mut identities = self.store.load()?;
        self.import_on_first_run(&mut identities)?;
        Ok(identities)
    }

    /// Global `user.name` and `user.email`, empty strings when unset.
    pub fn read_global_identity(&self) -> (String, String) {
        (self.read_or_empty(KEY_USER_NAME), self.read_or_empty(KEY_USER_EMAIL))
    }

    fn read_or_empty(&self, key: &str) -> String {
        match self.git.read_global_value(key) {
            Ok(value) => value.trim().to_string(),
            Err(e) => {
                warn!("Could not read global {key}, treating as unset: {e}");
                String::new()
            }
        }
    }

    /// Writes the identity into the global configuration.
    ///
    /// Steps run in order (name, email, ssh command) and stop at the first
    /// failure, which is reported with its step. Nothing is rolled back.
    /// Unsetting a stale ssh command is best effort.
    pub fn apply_identity(&self, identity: &Identity) -> SwitchResult<()> {
        debug!("Applying identity {} ({})", identity.id, identity.label());

        self.git
            .set_global_value(KEY_USER_NAME, &identity.name)
            .map_err(|e| SwitchError::step(ApplyStep::UserName, e))?;

        self.git
            .set_global_value(KEY_USER_EMAIL, &identity.email)
            .map_err(|e| SwitchError::step(ApplyStep::UserEmail, e))?;

        if identity.has_ssh_key() {
            self.git
                .set_global_value(KEY_SSH_COMMAND, &ssh_command_for(&identity.ssh_key_path))
                .map_err(|e| SwitchError::step(ApplyStep::SshCommand, e))?;
        } else if let Err(e) = self.git.unset_global_value(KEY_SSH_COMMAND) {
            debug!("Ignoring failure to unset {KEY_SSH_COMMAND}: {e}");
        }

        Ok(())
    }

    /// Applies the identity `id` and, only if that succeeds, marks it
    /// active and saves the store.
    pub fn switch_to(&self, identities: &mut IdentityStore, id: &str) -> SwitchResult<Identity> {
        let identity = identities
            .find(id)
            .cloned()
            .ok_or_else(|| SwitchError::unknown_identity(id))?;

        self.apply_identity(&identity)?;

        identities.set_active(&identity.id)?;
        self.store.save(identities)?;

        info!("Switched global identity to {}", identity.label());
        Ok(identity)
    }

    /// Imports the current global identity into an empty store.
    ///
    /// Runs at most once per switcher. Does nothing when the store already
    /// has identities or when global name or email is unset.
    pub fn import_on_first_run(
        &mut self,
        identities: &mut IdentityStore,
    ) -> SwitchResult<Option<Identity>> {
        if self.import_attempted {
            return Ok(None);
        }
        self.import_attempted = true;

        if !identities.is_empty() {
            return Ok(None);
        }

        let (name, email) = self.read_global_identity();
        if name.is_empty() || email.is_empty() {
            debug!("No complete global identity to import");
            return Ok(None);
        }

        let identity = Identity::new(identities.generate_id(), &name, &email, "")?;
        identities.add(identity.clone())?;
        identities.set_active(&identity.id)?;
        self.store.save(identities)?;

        info!("Imported existing global identity {}", identity.label());
        Ok(Some(identity))
    }

    /// Adds an identity and saves.
    pub fn add_identity(
        &self,
        identities: &mut IdentityStore,
        identity: Identity,
    ) -> SwitchResult<()> {
        identities.add(identity)?;
        self.store.save(identities)?;
        Ok(())
    }

    /// Edits an identity and saves. The global configuration is not touched,
    /// even when the edited identity is active.
    pub fn update_identity(
        &self,
        identities: &mut IdentityStore,
        id: &str,
        name: &str,
        email: &str,
        ssh_key_path: &str,
    ) -> SwitchResult<Identity> {
        let updated = identities.update(id, name, email, ssh_key_path)?.clone();
        self.store.save(identities)?;
        Ok(updated)
    }

    /// Removes an identity and saves. Returns whether anything was removed.
    pub fn delete_identity(&self, identities: &mut IdentityStore, id: &str) -> SwitchResult<bool> {
        let removed = identities.remove(id);
        if removed {
            self.store.save(identities)?;
            info!("Deleted identity {id}");
        }
        Ok(removed)
    }

    /// Global identity alongside the store's active identity.
    pub fn current_status(&self, identities: &IdentityStore) -> GlobalStatus {
        let (name, email) = self.read_global_identity();
        GlobalStatus {
            name,
            email,
            active: identities.active().cloned(),
        }
    }
}
