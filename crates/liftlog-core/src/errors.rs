// ABOUTME: Error types for the persistence boundary
// ABOUTME: Storage failures are logged and never surfaced through store mutation APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

/// Result type for storage gateway operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors at the key/value persistence boundary
///
/// The in-memory model is the source of truth; these errors describe
/// best-effort persistence failures, not domain faults. Domain-level
/// misuse (absent session, out-of-range index, protected exercise) is
/// expressed as silent no-ops with boolean/optional returns instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A partition document failed to serialize or deserialize
    #[error("Serialization failed for partition '{partition}'")]
    Serialization {
        /// Partition key the document belongs to
        partition: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The backing store rejected a read, write, or clear
    #[error("Storage backend error for partition '{partition}': {reason}")]
    Backend {
        /// Partition key the operation targeted
        partition: String,
        /// Backend-specific failure description
        reason: String,
    },
}

impl StorageError {
    /// Build a serialization error for `partition`
    #[must_use]
    pub fn serialization(partition: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            partition: partition.into(),
            source,
        }
    }

    /// Build a backend error for `partition`
    #[must_use]
    pub fn backend(partition: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            partition: partition.into(),
            reason: reason.into(),
        }
    }
}
