use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// List private keys in the key directory
    List,

    /// Generate a new key pair (no passphrase) in the key directory
    Generate {
        /// File name for the private key, e.g. id_work
        name: String,

        /// Comment embedded in the key, usually the identity's email
        #[arg(long)]
        email: String,

        /// ed25519, rsa or ecdsa (defaults to config)
        #[arg(long)]
        algorithm: Option<String>,
    },
}
