use std::fmt;

/// Errors reported by a store adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    Serde(String),
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Serde(message) => write!(f, "store serialization error: {}", message),
            StoreError::Backend(message) => write!(f, "store backend error: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors returned from model and record operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The requested entity does not exist in the store.
    NotFound { kind: String, id: i64 },
    /// A Before* event callback set the cancellation flag; the requested
    /// mutation did not occur.
    OperationCancelledByEventCallback,
    /// The backing store adapter failed.
    Store(StoreError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { kind, id } => {
                write!(f, "record not found: {}:{}", kind, id)
            }
            RecordError::OperationCancelledByEventCallback => {
                write!(f, "operation cancelled by event callback")
            }
            RecordError::Store(err) => write!(f, "store error: {}", err),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RecordError {
    fn from(err: StoreError) -> Self {
        RecordError::Store(err)
    }
}
