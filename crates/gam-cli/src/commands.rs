use crate::{key_commands::KeyCommands, store_commands::StoreCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved identities (* marks the active one)
    List,

    /// Show the global git identity and whether it matches the active one
    Current,

    /// Save a new identity
    Add {
        /// Value for user.name
        #[arg(long)]
        name: String,

        /// Value for user.email
        #[arg(long)]
        email: String,

        /// Private key to pin through core.sshCommand
        #[arg(long)]
        ssh_key: Option<String>,

        /// Apply the new identity right away
        #[arg(long = "use")]
        use_now: bool,
    },

    /// Change a saved identity
    Edit {
        /// Identity ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// New key path, empty string to drop the key
        #[arg(long)]
        ssh_key: Option<String>,
    },

    /// Delete a saved identity
    Remove {
        /// Identity ID
        id: String,
    },

    /// Apply an identity to the global git config
    Use {
        /// Identity ID
        id: String,
    },

    /// Import the current global identity into an empty store
    Import,

    /// SSH key operations
    Keys {
        #[command(subcommand)]
        action: KeyCommands,
    },

    /// Identity store file operations
    Store {
        #[command(subcommand)]
        action: StoreCommands,
    },
}
