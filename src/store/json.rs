//! File-backed store: a single JSON object mapping date strings to records.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub struct JsonStore {
    path: PathBuf,
    records: BTreeMap<String, Record>,
}

impl JsonStore {
    /// Open the store backed by `path`. A missing file is an empty store;
    /// so is an unreadable or corrupt one (availability over surfacing
    /// corruption, last write wins).
    pub fn open(path: &str) -> Self {
        let path = expand_tilde(path);
        let records = Self::load(&path);
        Self { path, records }
    }

    fn load(path: &Path) -> BTreeMap<String, Record> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        }
    }

    /// Rewrite the whole map. Write failures map to StoreWrite so callers
    /// can warn without aborting; they are not retried.
    fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AppError::StoreWrite(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AppError::StoreWrite(e.to_string()))?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn get_all(&self) -> &BTreeMap<String, Record> {
        &self.records
    }

    fn put(&mut self, key: &str, record: Record) -> AppResult<()> {
        self.records.insert(key.to_string(), record);
        self.save()
    }

    fn delete(&mut self, key: &str) -> AppResult<bool> {
        if self.records.remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }
}
