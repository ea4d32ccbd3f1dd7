//! Persistence collaborators for favorite records.

use super::FavoriteRecord;
use crate::error::StoreError;
use crate::shared::CoinId;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Backing store for favorites. At most one record per identifier: `insert`
/// replaces an existing record with the same id.
pub trait FavoritesStore: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<FavoriteRecord>, StoreError>;

    fn insert(&self, record: FavoriteRecord) -> Result<(), StoreError>;

    /// Deleting an id that is not stored is not an error.
    fn delete_by_identifier(&self, id: &CoinId) -> Result<(), StoreError>;
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// Process-local store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<CoinId, FavoriteRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn insert(&self, record: FavoriteRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete_by_identifier(&self, id: &CoinId) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.remove(id);
        Ok(())
    }
}

// ─── JsonFileStore ───────────────────────────────────────────────────────────

/// Store persisted as a JSON array in a single file.
///
/// A missing file reads as empty. Writes go to a sibling temp file that is then
/// renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<CoinId, FavoriteRecord>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        let records: Vec<FavoriteRecord> = serde_json::from_slice(&bytes)?;
        Ok(records.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    fn save(&self, records: &BTreeMap<CoinId, FavoriteRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let list: Vec<&FavoriteRecord> = records.values().collect();
        let json = serde_json::to_vec_pretty(&list)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl FavoritesStore for JsonFileStore {
    fn fetch_all(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.load()?.into_values().collect())
    }

    fn insert(&self, record: FavoriteRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut records = self.load()?;
        records.insert(record.id.clone(), record);
        self.save(&records)
    }

    fn delete_by_identifier(&self, id: &CoinId) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut records = self.load()?;
        if records.remove(id).is_some() {
            self.save(&records)?;
        }
        Ok(())
    }
}
