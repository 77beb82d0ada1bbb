//! RecordStore - the adapter contract to a physical keyed-entity store.

use crate::error::StoreError;
use crate::value::PropertyMap;

/// Abstract keyed-entity storage, scoped by kind.
///
/// This is the only seam between the lifecycle engine and a physical
/// datastore. Implementations must offer atomic single-entity operations;
/// nothing here coordinates across entities.
pub trait RecordStore: Send + Sync {
    /// Get the properties stored for `(kind, id)`. Returns `None` if absent.
    fn get(&self, kind: &str, id: i64) -> Result<Option<PropertyMap>, StoreError>;

    /// Write `properties` under `(kind, id)`. When `id` is `None` the store
    /// allocates a fresh non-zero identity and returns it; otherwise the
    /// given identity is returned unchanged.
    fn put(&self, kind: &str, id: Option<i64>, properties: &PropertyMap)
        -> Result<i64, StoreError>;

    /// Delete the entity stored under `(kind, id)`. Deleting an absent id is
    /// not required to error.
    fn delete(&self, kind: &str, id: i64) -> Result<(), StoreError>;

    /// Enumerate every entity of `kind`. Ordering is store-defined and not
    /// contractually stable.
    fn query(&self, kind: &str) -> Result<Vec<(i64, PropertyMap)>, StoreError>;
}
