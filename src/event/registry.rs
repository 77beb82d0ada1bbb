use std::fmt;
use std::sync::{Arc, RwLock};

use super::context::EventContext;

type Handler = Arc<dyn Fn(&mut EventContext) + Send + Sync>;

/// An ordered registry of handlers for one lifecycle point.
///
/// Clones share the underlying handler list, so every holder of a model
/// handle registers into, and fires, the same registry.
pub struct Event {
    handlers: Arc<RwLock<Vec<Handler>>>,
}

impl Event {
    pub fn new() -> Self {
        Event {
            handlers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a handler. Handlers fire in registration order; registering
    /// the same closure twice fires it twice.
    pub fn on<F>(&self, handler: F)
    where
        F: Fn(&mut EventContext) + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().unwrap();
        handlers.push(Arc::new(handler));
    }

    /// Invoke every registered handler in registration order, passing the
    /// same context to each. A handler setting `context.cancel` never skips
    /// the handlers after it; the flag is only read by the operation that
    /// fired the event, once dispatch completes.
    ///
    /// Dispatch runs against a snapshot of the handler list taken at fire
    /// time, so a handler may register further handlers or re-enter the
    /// owning model without deadlocking; the in-flight firing is unaffected.
    /// A panicking handler unwinds through the firing operation.
    pub fn fire(&self, context: &mut EventContext) {
        let snapshot: Vec<Handler> = self.handlers.read().unwrap().clone();
        for handler in &snapshot {
            handler(context);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().unwrap().len()
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Event {
    fn clone(&self) -> Self {
        Event {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
