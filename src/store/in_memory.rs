//! InMemoryStore - HashMap-backed record store for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::value::PropertyMap;

use super::store::RecordStore;

/// In-memory record store backed by a HashMap.
///
/// Storage key is `"kind:id"`; values are serialized property maps.
/// Clone-friendly via Arc; clones share the same storage and id sequence.
#[derive(Clone)]
pub struct InMemoryStore {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store. Allocated ids start at 1 and are never
    /// reused within this instance.
    pub fn new() -> Self {
        InMemoryStore {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn make_key(kind: &str, id: i64) -> String {
        format!("{}:{}", kind, id)
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, kind: &str, id: i64) -> Result<Option<PropertyMap>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;

        match storage.get(&Self::make_key(kind, id)) {
            Some(bytes) => {
                let properties: PropertyMap = serde_json::from_slice(bytes)
                    .map_err(|e| StoreError::Serde(e.to_string()))?;
                Ok(Some(properties))
            }
            None => Ok(None),
        }
    }

    fn put(
        &self,
        kind: &str,
        id: Option<i64>,
        properties: &PropertyMap,
    ) -> Result<i64, StoreError> {
        let bytes =
            serde_json::to_vec(properties).map_err(|e| StoreError::Serde(e.to_string()))?;

        let id = match id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("put"))?;
        storage.insert(Self::make_key(kind, id), bytes);

        Ok(id)
    }

    fn delete(&self, kind: &str, id: i64) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;
        storage.remove(&Self::make_key(kind, id));

        Ok(())
    }

    fn query(&self, kind: &str) -> Result<Vec<(i64, PropertyMap)>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("query"))?;

        let prefix = format!("{}:", kind);
        let mut rows = Vec::new();

        for (key, bytes) in storage.iter() {
            let id = match key.strip_prefix(&prefix).and_then(|s| s.parse::<i64>().ok()) {
                Some(id) => id,
                None => continue,
            };
            let properties: PropertyMap =
                serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))?;
            rows.push((id, properties));
        }

        Ok(rows)
    }
}
