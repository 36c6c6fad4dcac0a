//! A switchable git identity.

use crate::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};

/// Name, email and optional private key that together make up one git identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque, immutable, unique within a store
    pub id: String,
    pub name: String,
    pub email: String,
    /// Empty means "let ssh pick its default keys"
    #[serde(default)]
    pub ssh_key_path: String,
}

impl Identity {
    /// Create a validated identity. Name and email are trimmed and must be non-empty.
    #[track_caller]
    pub fn new(
        id: impl Into<String>,
        name: &str,
        email: &str,
        ssh_key_path: &str,
    ) -> CoreResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::validation("identity id must not be empty"));
        }

        let (name, email) = Self::validated_fields(name, email)?;

        Ok(Self {
            id,
            name,
            email,
            ssh_key_path: ssh_key_path.trim().to_string(),
        })
    }

    #[track_caller]
    pub(crate) fn validated_fields(name: &str, email: &str) -> CoreResult<(String, String)> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if email.is_empty() {
            return Err(CoreError::validation("email must not be empty"));
        }

        Ok((name.to_string(), email.to_string()))
    }

    pub fn has_ssh_key(&self) -> bool {
        !self.ssh_key_path.is_empty()
    }

    /// `Name <email>`, the form git prints in commit headers.
    pub fn label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}
