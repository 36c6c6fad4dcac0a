//! gam-cli library
//!
//! Command definitions and the [`App`] that executes them against the core.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod key_commands;
pub mod logger;
pub mod store_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, CliResult};
