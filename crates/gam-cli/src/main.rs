//! gam - switch the global git identity between saved accounts
//!
//! # Examples
//!
//! ```bash
//! # Save an identity and switch to it
//! gam add --name "Jane Doe" --email jane@work.example --ssh-key ~/.ssh/id_work --use
//!
//! # See what git uses right now
//! gam current
//!
//! # Switch by id
//! gam use 1718000000000
//! ```

use gam_cli::{App, Cli, CliResult, logger};
use gam_config::{Config, LogLevel};
use gam_core::{ConfigStore, GitCli, IdentitySwitcher, KeyAlgorithm, SshKeygenCli};

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.recovery_hint() {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    let log_level = if cli.verbose {
        LogLevel(LevelFilter::Debug)
    } else {
        config.logging.level
    };
    logger::initialize(log_level, config.log_file_path()?, config.logging.colored)?;
    config.log_summary();

    let store_dir = match cli.store_dir {
        Some(dir) => dir,
        None => config.store_dir()?,
    };
    let ssh_dir = match cli.ssh_dir {
        Some(dir) => dir,
        None => config.ssh_dir()?,
    };

    let mut git = GitCli::new(&config.tools.git_bin);
    if let Some(ref file) = config.tools.git_config_file {
        git = git.with_global_file(file);
    }
    let keygen = SshKeygenCli::new(&config.tools.ssh_keygen_bin);
    let key_algorithm = config.tools.key_algorithm.parse::<KeyAlgorithm>()?;

    let switcher = IdentitySwitcher::new(git, ConfigStore::new(store_dir));
    let mut app = App::new(switcher, keygen, ssh_dir, key_algorithm);
    app.run(cli.command)
}
