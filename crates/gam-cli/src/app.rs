//! Executes parsed commands against the identity switcher.
//!
//! Every method returns the text to print on stdout. Logging goes through
//! the `log` facade and never mixes into that text.

use crate::{
    commands::Commands,
    error::{CliError, CliResult},
    key_commands::KeyCommands,
    store_commands::StoreCommands,
};

use gam_core::{
    GitConfig, GlobalStatus, Identity, IdentityStore, IdentitySwitcher, KeyAlgorithm,
    KeyGenerator, generate_key, list_private_keys,
};

use std::path::{Path, PathBuf};

use log::debug;

pub struct App<G: GitConfig, K: KeyGenerator> {
    switcher: IdentitySwitcher<G>,
    keygen: K,
    ssh_dir: PathBuf,
    key_algorithm: KeyAlgorithm,
}

impl<G: GitConfig, K: KeyGenerator> App<G, K> {
    pub fn new(
        switcher: IdentitySwitcher<G>,
        keygen: K,
        ssh_dir: impl Into<PathBuf>,
        key_algorithm: KeyAlgorithm,
    ) -> Self {
        Self {
            switcher,
            keygen,
            ssh_dir: ssh_dir.into(),
            key_algorithm,
        }
    }

    pub fn switcher(&self) -> &IdentitySwitcher<G> {
        &self.switcher
    }

    pub fn ssh_dir(&self) -> &Path {
        &self.ssh_dir
    }

    pub fn run(&mut self, command: Commands) -> CliResult<String> {
        match command {
            Commands::Keys { action } => self.run_keys(action),
            Commands::Store { action } => self.run_store(action),

            Commands::Import => {
                let (identities, imported) = self.load()?;
                Ok(import_message(&identities, imported.as_ref()))
            }

            Commands::List => {
                let (identities, imported) = self.load()?;
                Ok(with_notice(imported.as_ref(), render_list(&identities)))
            }

            Commands::Current => {
                let (identities, imported) = self.load()?;
                let status = self.switcher.current_status(&identities);
                Ok(with_notice(imported.as_ref(), render_status(&status)))
            }

            Commands::Add {
                name,
                email,
                ssh_key,
                use_now,
            } => {
                let (mut identities, imported) = self.load()?;
                let output = self.add(
                    &mut identities,
                    &name,
                    &email,
                    ssh_key.as_deref().unwrap_or_default(),
                    use_now,
                )?;
                Ok(with_notice(imported.as_ref(), output))
            }

            Commands::Edit {
                id,
                name,
                email,
                ssh_key,
            } => {
                let (mut identities, imported) = self.load()?;
                let output = self.edit(&mut identities, &id, name, email, ssh_key)?;
                Ok(with_notice(imported.as_ref(), output))
            }

            Commands::Remove { id } => {
                let (mut identities, imported) = self.load()?;
                let output = if self.switcher.delete_identity(&mut identities, &id)? {
                    format!("Removed identity {id}")
                } else {
                    format!("No identity with id {id}, nothing removed")
                };
                Ok(with_notice(imported.as_ref(), output))
            }

            Commands::Use { id } => {
                let (mut identities, imported) = self.load()?;
                let identity = self.switcher.switch_to(&mut identities, &id)?;
                Ok(with_notice(imported.as_ref(), switched_message(&identity)))
            }
        }
    }

    /// Loads the store and gives the first-run import its single chance.
    fn load(&mut self) -> CliResult<(IdentityStore, Option<Identity>)> {
        let mut identities = self.switcher.config_store().load()?;
        let imported = self.switcher.import_on_first_run(&mut identities)?;
        debug!("Loaded {} identities", identities.len());
        Ok((identities, imported))
    }

    fn add(
        &self,
        identities: &mut IdentityStore,
        name: &str,
        email: &str,
        ssh_key: &str,
        use_now: bool,
    ) -> CliResult<String> {
        ensure_key_exists(ssh_key)?;

        let identity = Identity::new(identities.generate_id(), name, email, ssh_key)?;
        let id = identity.id.clone();
        let mut output = format!("Added {} as {id}", identity.label());
        self.switcher.add_identity(identities, identity)?;

        if use_now {
            let identity = self.switcher.switch_to(identities, &id)?;
            output.push('\n');
            output.push_str(&switched_message(&identity));
        }

        Ok(output)
    }

    fn edit(
        &self,
        identities: &mut IdentityStore,
        id: &str,
        name: Option<String>,
        email: Option<String>,
        ssh_key: Option<String>,
    ) -> CliResult<String> {
        let existing = identities
            .find(id)
            .cloned()
            .ok_or_else(|| CliError::unknown_identity(id))?;

        if let Some(ref key) = ssh_key {
            ensure_key_exists(key)?;
        }

        let updated = self.switcher.update_identity(
            identities,
            id,
            name.as_deref().unwrap_or(&existing.name),
            email.as_deref().unwrap_or(&existing.email),
            ssh_key.as_deref().unwrap_or(&existing.ssh_key_path),
        )?;

        let mut output = format!("Updated {} ({})", updated.label(), updated.id);
        if identities.is_active(&updated.id) {
            output.push_str(&format!(
                "\nThis identity is active. Run `gam use {}` to apply the changes to git.",
                updated.id
            ));
        }
        Ok(output)
    }

    fn run_keys(&self, action: KeyCommands) -> CliResult<String> {
        match action {
            KeyCommands::List => {
                let keys = list_private_keys(&self.ssh_dir)?;
                if keys.is_empty() {
                    return Ok(format!("No private keys in {}", self.ssh_dir.display()));
                }
                Ok(keys
                    .iter()
                    .map(|key| key.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }

            KeyCommands::Generate {
                name,
                email,
                algorithm,
            } => {
                let algorithm = match algorithm {
                    Some(value) => value.parse::<KeyAlgorithm>()?,
                    None => self.key_algorithm,
                };
                let path = generate_key(&self.keygen, &self.ssh_dir, &name, &email, algorithm)?;
                Ok(format!(
                    "Generated {algorithm} key {}\nPublic key: {}.pub",
                    path.display(),
                    path.display()
                ))
            }
        }
    }

    fn run_store(&self, action: StoreCommands) -> CliResult<String> {
        let store = self.switcher.config_store();
        match action {
            StoreCommands::Path => Ok(store.path().display().to_string()),
            StoreCommands::BackupCorrupted => Ok(match store.backup_corrupted()? {
                Some(backup) => format!(
                    "Moved {} to {}",
                    store.path().display(),
                    backup.display()
                ),
                None => format!(
                    "No identity store at {}, nothing to back up",
                    store.path().display()
                ),
            }),
        }
    }
}

/// Key paths are optional. When one is given it has to exist.
fn ensure_key_exists(ssh_key: &str) -> CliResult<()> {
    let trimmed = ssh_key.trim();
    if !trimmed.is_empty() && !Path::new(trimmed).is_file() {
        return Err(CliError::key_not_found(trimmed));
    }
    Ok(())
}

fn with_notice(imported: Option<&Identity>, output: String) -> String {
    match imported {
        Some(identity) => format!(
            "Imported existing global identity {} as {}\n{output}",
            identity.label(),
            identity.id
        ),
        None => output,
    }
}

fn import_message(identities: &IdentityStore, imported: Option<&Identity>) -> String {
    match imported {
        Some(identity) => format!(
            "Imported {} as {} (active)",
            identity.label(),
            identity.id
        ),
        None if !identities.is_empty() => format!(
            "Store already holds {} identities, nothing imported",
            identities.len()
        ),
        None => "Global git identity is incomplete, nothing imported".to_string(),
    }
}

fn switched_message(identity: &Identity) -> String {
    if identity.has_ssh_key() {
        format!(
            "Now using {} with key {}",
            identity.label(),
            identity.ssh_key_path
        )
    } else {
        format!("Now using {}", identity.label())
    }
}

pub(crate) fn render_list(identities: &IdentityStore) -> String {
    if identities.is_empty() {
        return "No identities saved. Add one with `gam add --name <name> --email <email>`."
            .to_string();
    }

    identities
        .identities()
        .iter()
        .map(|identity| {
            let marker = if identities.is_active(&identity.id) { '*' } else { ' ' };
            let mut line = format!("{marker} {}  {}", identity.id, identity.label());
            if identity.has_ssh_key() {
                line.push_str(&format!("  [{}]", identity.ssh_key_path));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_status(status: &GlobalStatus) -> String {
    let global = if status.is_configured() {
        format!("{} <{}>", status.name, status.email)
    } else {
        "not configured".to_string()
    };

    let mut output = format!("Global: {global}");
    match &status.active {
        Some(active) => {
            output.push_str(&format!("\nActive: {} ({})", active.label(), active.id));
            if !status.matches_active() {
                output.push_str(&format!(
                    "\nGlobal identity differs from the active one. Run `gam use {}` to re-apply it.",
                    active.id
                ));
            }
        }
        None => output.push_str("\nActive: none"),
    }
    output
}
