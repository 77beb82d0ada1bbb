mod error;
mod event;
mod model;
mod store;
mod value;

pub use error::{RecordError, StoreError};
pub use event::{Event, EventArg, EventContext};
pub use model::{Model, Record};
pub use store::{InMemoryStore, RecordStore};
pub use value::{PropertyMap, Value};
