use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The persistence substrate rejected a read or write (missing data
    /// directory, permissions, disk full). The operation did not take effect.
    #[error("storage unavailable: {source}")]
    Storage {
        #[from]
        source: std::io::Error,
    },

    #[error("corrupt collection data: {source}")]
    Codec {
        #[from]
        source: serde_json::Error,
    },
}

/// Result of an update or delete addressed by identifier.
///
/// Missing identifiers are a normal outcome, not an error: callers that need
/// to distinguish "record changed" from "nothing matched" inspect this instead
/// of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    pub fn is_applied(self) -> bool {
        self == WriteOutcome::Applied
    }
}
