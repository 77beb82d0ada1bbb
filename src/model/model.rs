use std::fmt;
use std::sync::Arc;

use crate::error::RecordError;
use crate::event::{Event, EventContext};
use crate::store::RecordStore;

use super::record::Record;

/// One entity kind: the per-kind factory object that mediates CRUD against
/// the backing store and owns the lifecycle event registries.
///
/// `Model` is a cheap-clone handle; clones (and every record produced by
/// [`new_record`](Model::new_record), [`find`](Model::find) or
/// [`all`](Model::all)) share the same kind, store and registries by
/// reference.
#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

struct ModelInner {
    kind: String,
    store: Arc<dyn RecordStore>,
    after_find: Event,
    before_put: Event,
    after_put: Event,
    before_delete_by_id: Event,
    after_delete_by_id: Event,
}

impl Model {
    /// Create a model for `kind` backed by `store`.
    pub fn new<S: RecordStore + 'static>(kind: impl Into<String>, store: S) -> Self {
        Model {
            inner: Arc::new(ModelInner {
                kind: kind.into(),
                store: Arc::new(store),
                after_find: Event::new(),
                before_put: Event::new(),
                after_put: Event::new(),
                before_delete_by_id: Event::new(),
                after_delete_by_id: Event::new(),
            }),
        }
    }

    /// Create a model and run `f` against it before returning it. Intended
    /// for registering event handlers at construction time.
    pub fn configure<S, F>(kind: impl Into<String>, store: S, f: F) -> Self
    where
        S: RecordStore + 'static,
        F: FnOnce(&Model),
    {
        let model = Model::new(kind, store);
        f(&model);
        model
    }

    /// The kind string naming this model's entity collection.
    pub fn record_type(&self) -> &str {
        &self.inner.kind
    }

    pub(crate) fn store(&self) -> &dyn RecordStore {
        self.inner.store.as_ref()
    }

    /// Fired once per record hydrated by [`find`](Model::find) or
    /// [`all`](Model::all), with the record in `args[0]`.
    pub fn after_find(&self) -> &Event {
        &self.inner.after_find
    }

    /// Fired by [`Record::put`] before the store write; setting `cancel`
    /// vetoes the write.
    pub fn before_put(&self) -> &Event {
        &self.inner.before_put
    }

    /// Fired by [`Record::put`] after a successful store write, with the
    /// same context the BeforePut firing used.
    pub fn after_put(&self) -> &Event {
        &self.inner.after_put
    }

    /// Fired by [`delete`](Model::delete) before the store delete, with the
    /// target id in `args[0]`; setting `cancel` vetoes the delete.
    pub fn before_delete_by_id(&self) -> &Event {
        &self.inner.before_delete_by_id
    }

    /// Fired by [`delete`](Model::delete) after a successful store delete,
    /// with the same context the BeforeDeleteByID firing used.
    pub fn after_delete_by_id(&self) -> &Event {
        &self.inner.after_delete_by_id
    }

    /// Create a new unpersisted record bound to this model. No events fire.
    pub fn new_record(&self) -> Record {
        Record::unpersisted(self.clone())
    }

    /// Load the record stored under `id`.
    ///
    /// Fires AfterFind once with the hydrated record; a lookup miss returns
    /// [`RecordError::NotFound`] and fires nothing.
    pub fn find(&self, id: i64) -> Result<Record, RecordError> {
        match self.inner.store.get(&self.inner.kind, id)? {
            Some(properties) => {
                let record = Record::hydrated(self.clone(), id, properties);
                let mut context = EventContext::with_record(record.clone());
                self.inner.after_find.fire(&mut context);
                Ok(record)
            }
            None => Err(RecordError::NotFound {
                kind: self.inner.kind.clone(),
                id,
            }),
        }
    }

    /// Load every record of this kind. Result ordering is store-defined.
    ///
    /// AfterFind fires once per record retrieved, each firing with a fresh
    /// context carrying that record.
    pub fn all(&self) -> Result<Vec<Record>, RecordError> {
        let rows = self.inner.store.query(&self.inner.kind)?;

        let mut records = Vec::with_capacity(rows.len());
        for (id, properties) in rows {
            let record = Record::hydrated(self.clone(), id, properties);
            let mut context = EventContext::with_record(record.clone());
            self.inner.after_find.fire(&mut context);
            records.push(record);
        }

        Ok(records)
    }

    /// Delete the record stored under `id`.
    ///
    /// Fires BeforeDeleteByID with the id in `args[0]`; if a handler set
    /// `cancel`, returns [`RecordError::OperationCancelledByEventCallback`]
    /// without touching the store. Otherwise deletes and fires
    /// AfterDeleteByID with the same context instance. Store failures
    /// propagate and suppress the After firing.
    pub fn delete(&self, id: i64) -> Result<(), RecordError> {
        let mut context = EventContext::with_id(id);
        self.inner.before_delete_by_id.fire(&mut context);

        if context.cancel {
            tracing::debug!(
                "delete of {}:{} cancelled by event callback",
                self.inner.kind,
                id
            );
            return Err(RecordError::OperationCancelledByEventCallback);
        }

        self.inner.store.delete(&self.inner.kind, id)?;
        tracing::debug!("deleted record {}:{}", self.inner.kind, id);

        self.inner.after_delete_by_id.fire(&mut context);

        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Model:{}}}", self.inner.kind)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("kind", &self.inner.kind)
            .finish()
    }
}
