use std::fmt;
use std::sync::{Arc, RwLock};

use crate::error::RecordError;
use crate::event::EventContext;
use crate::value::{PropertyMap, Value};

use super::model::Model;

/// One entity instance bound to a [`Model`].
///
/// `Record` is a shared-interior handle: clones observe the same identity
/// and properties, so the record a handler receives inside an
/// [`EventContext`] is the record the caller holds. An AfterPut handler
/// therefore sees the identity assigned by the write it follows.
#[derive(Clone)]
pub struct Record {
    model: Model,
    inner: Arc<RwLock<RecordInner>>,
}

struct RecordInner {
    id: Option<i64>,
    properties: PropertyMap,
}

impl Record {
    pub(crate) fn unpersisted(model: Model) -> Self {
        Record {
            model,
            inner: Arc::new(RwLock::new(RecordInner {
                id: None,
                properties: PropertyMap::new(),
            })),
        }
    }

    pub(crate) fn hydrated(model: Model, id: i64, properties: PropertyMap) -> Self {
        Record {
            model,
            inner: Arc::new(RwLock::new(RecordInner {
                id: Some(id),
                properties,
            })),
        }
    }

    /// The model this record belongs to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The record's identity, or 0 if it has never been persisted.
    pub fn id(&self) -> i64 {
        self.inner.read().unwrap().id.unwrap_or(0)
    }

    /// Whether this record has been stored (an identity is set).
    pub fn is_persisted(&self) -> bool {
        self.inner.read().unwrap().id.is_some()
    }

    /// Store `value` under `name`, replacing any existing value. Returns a
    /// handle to the same record so calls chain.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.inner
            .write()
            .unwrap()
            .properties
            .insert(name.into(), value.into());
        self.clone()
    }

    /// The value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.inner.read().unwrap().properties.get(name).cloned()
    }

    pub fn get_str(&self, name: &str) -> Option<String> {
        self.get(name)
            .and_then(|value| value.as_str().map(str::to_string))
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|value| value.as_i64())
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|value| value.as_f64())
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(|value| value.as_bool())
    }

    /// A snapshot of the record's properties.
    pub fn properties(&self) -> PropertyMap {
        self.inner.read().unwrap().properties.clone()
    }

    /// Write this record to the store.
    ///
    /// Fires BeforePut on the owning model with this record in `args[0]`;
    /// if a handler set `cancel`, returns
    /// [`RecordError::OperationCancelledByEventCallback`] and no store
    /// mutation occurs (identity stays unset). Otherwise the properties as
    /// of after the Before handlers ran are written; a first persistence
    /// assigns the store-allocated identity onto the record, after which it
    /// is immutable. AfterPut fires with the same context instance the
    /// BeforePut firing used. Store failures propagate and suppress
    /// AfterPut.
    pub fn put(&self) -> Result<(), RecordError> {
        let mut context = EventContext::with_record(self.clone());
        self.model.before_put().fire(&mut context);

        if context.cancel {
            tracing::debug!(
                "put of {} record cancelled by event callback",
                self.model.record_type()
            );
            return Err(RecordError::OperationCancelledByEventCallback);
        }

        let (current_id, properties) = {
            let inner = self.inner.read().unwrap();
            (inner.id, inner.properties.clone())
        };

        let assigned = self
            .model
            .store()
            .put(self.model.record_type(), current_id, &properties)?;

        if current_id.is_none() {
            self.inner.write().unwrap().id = Some(assigned);
        }
        tracing::debug!("put record {}:{}", self.model.record_type(), assigned);

        self.model.after_put().fire(&mut context);

        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("Record")
            .field("kind", &self.model.record_type())
            .field("id", &inner.id)
            .field("properties", &inner.properties)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn test_model() -> Model {
        Model::new("things", InMemoryStore::new())
    }

    #[test]
    fn fresh_record_is_unpersisted_with_zero_id() {
        let record = test_model().new_record();

        assert!(!record.is_persisted());
        assert_eq!(record.id(), 0);
        assert!(record.properties().is_empty());
    }

    #[test]
    fn set_and_get() {
        let record = test_model().new_record();

        record.set("name", "Mat").set("age", 29);

        assert_eq!(record.get("name"), Some(Value::Str("Mat".to_string())));
        assert_eq!(record.get_str("name").as_deref(), Some("Mat"));
        assert_eq!(record.get_i64("age"), Some(29));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn set_overwrites() {
        let record = test_model().new_record();

        record.set("age", 29).set("age", 30);

        assert_eq!(record.get_i64("age"), Some(30));
        assert_eq!(record.properties().len(), 1);
    }

    #[test]
    fn clones_share_the_same_entity() {
        let record = test_model().new_record();
        let handle = record.clone();

        handle.set("name", "Mat");

        assert_eq!(record.get_str("name").as_deref(), Some("Mat"));
    }

    #[test]
    fn typed_getters_respect_the_stored_kind() {
        let record = test_model().new_record();
        record.set("age", 29);

        assert_eq!(record.get_str("age"), None);
        assert_eq!(record.get_bool("age"), None);
        assert_eq!(record.get_f64("age"), None);
        assert_eq!(record.get_i64("age"), Some(29));
    }

    #[test]
    fn debug_names_the_kind() {
        let record = test_model().new_record();
        let debug_str = format!("{:?}", record);

        assert!(debug_str.contains("Record"));
        assert!(debug_str.contains("things"));
    }
}
