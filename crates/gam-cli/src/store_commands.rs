use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Print the path of accounts.json
    Path,

    /// Move an unreadable accounts.json aside so the tool can start fresh
    BackupCorrupted,
}
