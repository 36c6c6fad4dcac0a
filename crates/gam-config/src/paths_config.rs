use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `accounts.json` (defaults to the config directory)
    pub store_dir: Option<String>,
    /// Directory scanned for private keys (defaults to `~/.ssh`)
    pub ssh_dir: Option<String>,
}

impl PathsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (field, value) in [("store_dir", &self.store_dir), ("ssh_dir", &self.ssh_dir)] {
            if let Some(dir) = value
                && dir.trim().is_empty()
            {
                return Err(ConfigError::paths(format!(
                    "paths.{field} must not be empty when set"
                )));
            }
        }

        Ok(())
    }
}
