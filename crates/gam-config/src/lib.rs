mod config;
mod error;
mod log_level;
mod logging_config;
mod paths_config;
mod tools_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use paths_config::PathsConfig;
pub use tools_config::ToolsConfig;

/// Directory name under the platform config dir. Shared with the store file.
pub const APP_DIR_NAME: &str = "git-account-manager-go";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR_ENV: &str = "GAM_CONFIG_DIR";

const DEFAULT_GIT_BIN: &str = "git";
const DEFAULT_SSH_KEYGEN_BIN: &str = "ssh-keygen";
const DEFAULT_KEY_ALGORITHM: &str = "ed25519";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_SSH_DIR_NAME: &str = ".ssh";

/// Algorithms accepted by `ssh-keygen -t` that the tool offers.
pub const SUPPORTED_KEY_ALGORITHMS: &[&str] = &["ed25519", "rsa", "ecdsa"];
