#![allow(dead_code)]

use records_rust::{InMemoryStore, Model, Record};

/// A model over a fresh in-memory store, isolated per test.
pub fn test_model(kind: &str) -> Model {
    Model::new(kind, InMemoryStore::new())
}

/// A record persisted before any test handlers are registered.
pub fn persisted_record(model: &Model) -> Record {
    let record = model.new_record().set("name", "Mat").set("age", 29);
    record.put().expect("put should succeed");
    record
}
