//! Error types for port operations.

/// Live-state read errors.
///
/// None of these are fatal: the `LiveState` entity turns every error into the
/// most conservative value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiveStateError {
    /// The host has no character loaded (logged out, loading screen).
    #[error("Live state unavailable")]
    Unavailable,

    /// The host does not know the quest id.
    #[error("Unknown quest: {0}")]
    UnknownQuest(String),

    /// The read itself failed.
    #[error("Live state read failed for {what}: {message}")]
    Read { what: String, message: String },
}

impl LiveStateError {
    /// Create a Read error with the value that was being read.
    pub fn read(what: impl ToString, message: impl ToString) -> Self {
        Self::Read {
            what: what.to_string(),
            message: message.to_string(),
        }
    }

    pub fn unknown_quest(id: impl ToString) -> Self {
        Self::UnknownQuest(id.to_string())
    }
}
