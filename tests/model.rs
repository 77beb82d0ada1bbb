mod support;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use records_rust::{InMemoryStore, Model};
use support::test_model;

#[test]
fn new_model_record_type() {
    let model = test_model("kind1");

    assert_eq!(model.record_type(), "kind1");
}

#[test]
fn configure_runs_the_callback_with_the_model() {
    let called = Arc::new(AtomicBool::new(false));

    let model = Model::configure("kind2", InMemoryStore::new(), |m| {
        called.store(true, Ordering::SeqCst);
        assert_eq!(m.record_type(), "kind2");
    });

    assert!(called.load(Ordering::SeqCst));
    assert_eq!(model.record_type(), "kind2");
}

#[test]
fn configure_can_register_handlers() {
    let model = Model::configure("kind3", InMemoryStore::new(), |m| {
        m.before_put().on(|context| context.cancel = true);
    });

    assert_eq!(model.before_put().handler_count(), 1);
}

#[test]
fn new_record_is_unpersisted() {
    let model = test_model("model");
    let record = model.new_record();

    assert!(!record.is_persisted());
    assert_eq!(record.id(), 0);
}

#[test]
fn model_display() {
    let model = test_model("people");

    assert_eq!(model.to_string(), "{Model:people}");
}

#[test]
fn clones_share_registries() {
    let model = test_model("people");
    let other = model.clone();

    other.after_find().on(|_| {});

    assert_eq!(model.after_find().handler_count(), 1);
}
