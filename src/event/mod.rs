mod context;
mod registry;

pub use context::{EventArg, EventContext};
pub use registry::Event;
