use crate::{
    APP_DIR_NAME, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_SSH_DIR_NAME, LoggingConfig, PathsConfig, ToolsConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Load settings.
    ///
    /// Loading order:
    /// 1. Check for GAM_CONFIG_DIR env var, else use `<platform config dir>/git-account-manager-go/`
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GAM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GAM_CONFIG_DIR env var > platform config dir
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Directory holding the identity store.
    pub fn store_dir(&self) -> ConfigErrorResult<PathBuf> {
        match &self.paths.store_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Self::config_dir(),
        }
    }

    /// Directory scanned for private keys and used for new key pairs.
    pub fn ssh_dir(&self) -> ConfigErrorResult<PathBuf> {
        match &self.paths.ssh_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_SSH_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Log file path, relative paths resolved against the config directory.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let path = PathBuf::from(file);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.paths.validate()?;
        self.tools.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::config("logging.file must not be empty when set"));
        }

        Ok(())
    }

    /// Log configuration summary at debug level.
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        debug!(
            "  paths: store_dir={}, ssh_dir={}",
            self.paths.store_dir.as_deref().unwrap_or("<default>"),
            self.paths.ssh_dir.as_deref().unwrap_or("<default>")
        );
        debug!(
            "  tools: git={}, ssh-keygen={}, key_algorithm={}, git_config_file={}",
            self.tools.git_bin,
            self.tools.ssh_keygen_bin,
            self.tools.key_algorithm,
            self.tools.git_config_file.as_deref().unwrap_or("<git default>")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Paths
        Self::apply_env_option_string("GAM_STORE_DIR", &mut self.paths.store_dir);
        Self::apply_env_option_string("GAM_SSH_DIR", &mut self.paths.ssh_dir);

        // Tools
        Self::apply_env_string("GAM_GIT_BIN", &mut self.tools.git_bin);
        Self::apply_env_string("GAM_SSH_KEYGEN_BIN", &mut self.tools.ssh_keygen_bin);
        Self::apply_env_string("GAM_KEY_ALGORITHM", &mut self.tools.key_algorithm);
        Self::apply_env_option_string("GAM_GIT_CONFIG_FILE", &mut self.tools.git_config_file);

        // Logging
        Self::apply_env_parse("GAM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GAM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GAM_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
