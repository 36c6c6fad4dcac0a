//! The persisted aggregate: saved identities plus the active pointer.

use crate::{CoreError, CoreResult, Identity};

use log::debug;
use serde::{Deserialize, Serialize};

/// Ordered identities and the id of the one last applied.
///
/// `active_id` is either empty or the id of an entry in `identities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityStore {
    #[serde(rename = "accounts", default)]
    identities: Vec<Identity>,
    #[serde(default)]
    active_id: String,
}

impl IdentityStore {
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Identity> {
        self.identities.iter().find(|identity| identity.id == id)
    }

    /// Id of the active identity, `None` when nothing has been applied yet.
    pub fn active_id(&self) -> Option<&str> {
        (!self.active_id.is_empty()).then_some(self.active_id.as_str())
    }

    pub fn active(&self) -> Option<&Identity> {
        self.active_id().and_then(|id| self.find(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        !self.active_id.is_empty() && self.active_id == id
    }

    /// Fresh id derived from the current time in milliseconds, bumped past
    /// any id already taken.
    pub fn generate_id(&self) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        while self.find(&millis.to_string()).is_some() {
            millis += 1;
        }
        millis.to_string()
    }

    /// Append an identity. Ids must be unique.
    #[track_caller]
    pub fn add(&mut self, identity: Identity) -> CoreResult<()> {
        if self.find(&identity.id).is_some() {
            return Err(CoreError::duplicate_id(identity.id));
        }

        debug!("Adding identity {} ({})", identity.id, identity.label());
        self.identities.push(identity);
        Ok(())
    }

    /// Remove an identity by id. Unknown ids are a no-op.
    ///
    /// Removing the active identity clears the active pointer; no other
    /// identity is promoted.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.identities.len();
        self.identities.retain(|identity| identity.id != id);
        let removed = self.identities.len() != before;

        if removed && self.active_id == id {
            debug!("Removed active identity {id}, clearing active pointer");
            self.active_id.clear();
        }

        removed
    }

    /// Replace name, email and key path of an existing identity.
    #[track_caller]
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        ssh_key_path: &str,
    ) -> CoreResult<&Identity> {
        let (name, email) = Identity::validated_fields(name, email)?;

        let Some(identity) = self.identities.iter_mut().find(|identity| identity.id == id) else {
            return Err(CoreError::not_found(id));
        };

        identity.name = name;
        identity.email = email;
        identity.ssh_key_path = ssh_key_path.trim().to_string();
        Ok(&*identity)
    }

    /// Point `active_id` at an existing identity.
    #[track_caller]
    pub(crate) fn set_active(&mut self, id: &str) -> CoreResult<()> {
        if self.find(id).is_none() {
            return Err(CoreError::not_found(id));
        }

        self.active_id = id.to_string();
        Ok(())
    }

    /// Drop an `active_id` that names no identity. Returns the dropped id.
    pub(crate) fn clear_dangling_active(&mut self) -> Option<String> {
        if self.active_id.is_empty() || self.find(&self.active_id).is_some() {
            return None;
        }

        Some(std::mem::take(&mut self.active_id))
    }
}
