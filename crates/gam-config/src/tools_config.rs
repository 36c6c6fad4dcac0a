use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GIT_BIN, DEFAULT_KEY_ALGORITHM,
    DEFAULT_SSH_KEYGEN_BIN, SUPPORTED_KEY_ALGORITHMS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Program used for `git config --global ...`
    pub git_bin: String,
    /// Program used to generate key pairs
    pub ssh_keygen_bin: String,
    /// Algorithm passed to `ssh-keygen -t` when none is given
    pub key_algorithm: String,
    /// Global git config file to manage instead of git's own default
    pub git_config_file: Option<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git_bin: String::from(DEFAULT_GIT_BIN),
            ssh_keygen_bin: String::from(DEFAULT_SSH_KEYGEN_BIN),
            key_algorithm: String::from(DEFAULT_KEY_ALGORITHM),
            git_config_file: None,
        }
    }
}

impl ToolsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.git_bin.trim().is_empty() {
            return Err(ConfigError::tools("tools.git_bin must not be empty"));
        }

        if self.ssh_keygen_bin.trim().is_empty() {
            return Err(ConfigError::tools("tools.ssh_keygen_bin must not be empty"));
        }

        if let Some(file) = &self.git_config_file
            && file.trim().is_empty()
        {
            return Err(ConfigError::tools("tools.git_config_file must not be empty when set"));
        }

        let algorithm = self.key_algorithm.to_lowercase();
        if !SUPPORTED_KEY_ALGORITHMS.contains(&algorithm.as_str()) {
            return Err(ConfigError::tools(format!(
                "tools.key_algorithm must be one of {}, got '{}'",
                SUPPORTED_KEY_ALGORITHMS.join(", "),
                self.key_algorithm
            )));
        }

        Ok(())
    }
}
