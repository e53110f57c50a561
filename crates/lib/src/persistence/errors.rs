//! Persistence error types.
//!
//! These errors describe failures of a [`Persistence`](super::Persistence)
//! adapter. The manager never surfaces a failed `set` to its caller; it logs
//! it and carries on with its in-memory state. Failed `get`s during open or
//! reload are returned.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing persisted order state.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("File I/O error on {path}")]
    FileIo {
        /// The file being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// The storage refused the write.
    #[error("Write rejected: {reason}")]
    WriteRejected {
        /// Description of why the write was refused
        reason: String,
    },

    /// The stored state was written by a newer format version.
    #[error("Unsupported state version {found} (this build reads up to {supported})")]
    UnsupportedVersion {
        /// Version found in storage
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },

    /// The storage could not be reached at all.
    #[error("Storage unavailable: {reason}")]
    Unavailable {
        /// Description of the failure
        reason: String,
    },
}

impl PersistenceError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            PersistenceError::FileIo { .. } | PersistenceError::Unavailable { .. }
        )
    }

    /// Check if this error is related to (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            PersistenceError::SerializationFailed { .. }
                | PersistenceError::DeserializationFailed { .. }
        )
    }

    /// Check if the stored state has a version this build cannot read.
    pub fn is_version_error(&self) -> bool {
        matches!(self, PersistenceError::UnsupportedVersion { .. })
    }

    /// Check if the storage refused a write.
    pub fn is_write_rejected(&self) -> bool {
        matches!(self, PersistenceError::WriteRejected { .. })
    }
}

// Conversion from PersistenceError to the main Error type
impl From<PersistenceError> for crate::Error {
    fn from(err: PersistenceError) -> Self {
        crate::Error::Persistence(err)
    }
}
