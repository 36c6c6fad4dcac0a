use crate::Identity;

/// What git currently uses globally, next to what the store believes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStatus {
    pub name: String,
    pub email: String,
    pub active: Option<Identity>,
}

impl GlobalStatus {
    pub fn is_configured(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// The active identity's name and email match the global values.
    pub fn matches_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.name == self.name && active.email == self.email)
    }
}
