use crate::{KEY_SSH_COMMAND, KEY_USER_EMAIL, KEY_USER_NAME};

use std::fmt;

/// The ordered writes that make up applying an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStep {
    UserName,
    UserEmail,
    SshCommand,
}

impl ApplyStep {
    pub fn key(&self) -> &'static str {
        match self {
            Self::UserName => KEY_USER_NAME,
            Self::UserEmail => KEY_USER_EMAIL,
            Self::SshCommand => KEY_SSH_COMMAND,
        }
    }
}

impl fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set {}", self.key())
    }
}
