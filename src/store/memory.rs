//! In-memory store, used as a test fake and for dry runs.

use std::collections::BTreeMap;

use crate::errors::AppResult;
use crate::models::record::Record;
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get_all(&self) -> &BTreeMap<String, Record> {
        &self.records
    }

    fn put(&mut self, key: &str, record: Record) -> AppResult<()> {
        self.records.insert(key.to_string(), record);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<bool> {
        Ok(self.records.remove(key).is_some())
    }
}
