pub mod error;

use crate::{
    BACKUP_DATE_FORMAT, IdentityStore, STORE_FILENAME,
    store::error::{StoreError, StoreResult},
};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Reads and writes `accounts.json` in a single directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the store file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILENAME)
    }

    /// Loads the identity store.
    ///
    /// A missing file is a first run and yields an empty store. A file that
    /// exists but does not parse is an error; it is never replaced here.
    pub fn load(&self) -> StoreResult<IdentityStore> {
        let path = self.path();

        if !path.exists() {
            info!("No identity store at {path:?} (first run)");
            return Ok(IdentityStore::default());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        let mut store = serde_json::from_str::<IdentityStore>(&contents).map_err(|e| {
            warn!("Identity store corrupted at {path:?}: {e}");
            StoreError::corrupted(path.clone(), e.to_string())
        })?;

        if let Some(dangling) = store.clear_dangling_active() {
            warn!("Active identity {dangling} not found in store, treating as none active");
        }

        info!("Loaded {} identities from {path:?}", store.len());
        Ok(store)
    }

    /// Saves the store, replacing prior content.
    ///
    /// 1. Writes to a temp file next to the store
    /// 2. Syncs to disk (fsync)
    /// 3. Renames over the store file
    pub fn save(&self, store: &IdentityStore) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{STORE_FILENAME}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(store)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!(
            "Saved {} identities (active: {})",
            store.len(),
            store.active_id().unwrap_or("none")
        );
        Ok(())
    }

    /// Moves a store file aside as `accounts.json.corrupted.{timestamp}`.
    ///
    /// Returns `None` when there is no store file.
    pub fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(BACKUP_DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{STORE_FILENAME}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| StoreError::backup_failed(path, e))?;

        warn!("Backed up identity store to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
