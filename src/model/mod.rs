//! Models - typed CRUD over a keyed-entity store with lifecycle events.
//!
//! A [`Model`] describes one entity kind and owns the event registries for
//! its lifecycle points; a [`Record`] is one entity instance bound to a
//! model. External code observes and vetoes persistence operations by
//! registering handlers on the model's events.
//!
//! ## Example
//!
//! ```
//! use records_rust::{InMemoryStore, Model};
//!
//! let people = Model::new("people", InMemoryStore::new());
//!
//! people.before_put().on(|context| {
//!     if let Some(record) = context.record() {
//!         if record.get("name").is_none() {
//!             context.cancel = true;
//!         }
//!     }
//! });
//!
//! let person = people.new_record().set("name", "Mat").set("age", 29);
//! person.put()?;
//!
//! assert!(person.is_persisted());
//! let found = people.find(person.id())?;
//! assert_eq!(found.get_str("name").as_deref(), Some("Mat"));
//! # Ok::<(), records_rust::RecordError>(())
//! ```

mod model;
mod record;

pub use model::Model;
pub use record::Record;
