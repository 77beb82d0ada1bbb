use crate::model::Record;

/// One argument handed to an event handler.
///
/// The payload shapes are a closed set: the record an operation is acting
/// on, or the numeric identity of a delete-by-id target.
#[derive(Debug, Clone)]
pub enum EventArg {
    Record(Record),
    Id(i64),
}

impl EventArg {
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            EventArg::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            EventArg::Id(id) => Some(*id),
            _ => None,
        }
    }
}

/// Mutable state shared by every handler invoked for one logical operation.
///
/// A single context is created per operation and threaded by reference
/// through both the Before* and After* firings, so a handler on the After
/// event observes mutations made by handlers on the Before event. Setting
/// `cancel` from a Before* handler vetoes the pending store mutation; the
/// orchestrating operation reads the flag once dispatch completes.
#[derive(Debug)]
pub struct EventContext {
    pub cancel: bool,
    pub args: Vec<EventArg>,
}

impl EventContext {
    pub fn new(args: Vec<EventArg>) -> Self {
        EventContext {
            cancel: false,
            args,
        }
    }

    /// Context for an operation acting on a record (`args[0]` is the record).
    pub fn with_record(record: Record) -> Self {
        EventContext::new(vec![EventArg::Record(record)])
    }

    /// Context for an operation acting on an identity (`args[0]` is the id).
    pub fn with_id(id: i64) -> Self {
        EventContext::new(vec![EventArg::Id(id)])
    }

    /// The record in `args[0]`, if that is what this operation carries.
    pub fn record(&self) -> Option<&Record> {
        self.args.first().and_then(EventArg::as_record)
    }

    /// The id in `args[0]`, if that is what this operation carries.
    pub fn id(&self) -> Option<i64> {
        self.args.first().and_then(EventArg::as_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryStore, Model};

    #[test]
    fn with_id() {
        let context = EventContext::with_id(42);
        assert!(!context.cancel);
        assert_eq!(context.args.len(), 1);
        assert_eq!(context.id(), Some(42));
        assert!(context.record().is_none());
    }

    #[test]
    fn with_record() {
        let model = Model::new("things", InMemoryStore::new());
        let record = model.new_record();
        let context = EventContext::with_record(record.clone());

        assert!(!context.cancel);
        assert_eq!(context.id(), None);
        assert!(context.record().is_some());
    }

    #[test]
    fn empty_args() {
        let context = EventContext::new(Vec::new());
        assert!(context.record().is_none());
        assert!(context.id().is_none());
    }
}
