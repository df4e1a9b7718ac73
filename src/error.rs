//! Error types for collab-ledger
//!
//! Every ledger operation is total: failures come back as values of this
//! enum and are never raised as panics.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Wire code for a missing record.
pub const CODE_NOT_FOUND: u16 = 404;

/// Wire code for a caller that is not the record's privileged identity.
pub const CODE_FORBIDDEN: u16 = 403;

/// Wire code for an argument list that does not match the method's shape.
pub const CODE_INVALID_ARGUMENTS: u16 = 400;

/// Collab-ledger error types
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced id has no record
    #[error("{kind} {id} not found")]
    NotFound {
        /// Record kind ("experiment" or "dataset")
        kind: &'static str,
        /// Requested id
        id: u64,
    },

    /// Caller is not the record's privileged identity
    #[error("{caller} is not permitted to modify {kind} {id}")]
    Forbidden {
        /// Record kind ("experiment" or "dataset")
        kind: &'static str,
        /// Target id
        id: u64,
        /// Rejected caller identity
        caller: String,
    },

    /// Unrecognized method name at the command boundary
    #[error("Unknown method: {0}")]
    UnknownOperation(String),

    /// Argument list rejected at the command boundary
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Snapshot decoded but violates a ledger invariant
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Snapshot (de)serialization failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Numeric wire code, if this error has one.
    ///
    /// `UnknownOperation` has no number; the boundary reports it as the literal
    /// "Unknown method".
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(CODE_NOT_FOUND),
            Self::Forbidden { .. } => Some(CODE_FORBIDDEN),
            Self::InvalidArguments(_) => Some(CODE_INVALID_ARGUMENTS),
            Self::UnknownOperation(_)
            | Self::CorruptSnapshot(_)
            | Self::Snapshot(_)
            | Self::Io(_) => None,
        }
    }

    /// True if the referenced record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True if the caller lacked the privileged identity.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}
