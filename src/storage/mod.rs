// ABOUTME: Key/value string storage port the state stores persist through
// ABOUTME: Pluggable backend trait following the provider pattern, with an in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! The persistence gateway.
//!
//! Three independent logical partitions are persisted under distinct keys,
//! each as a single JSON document mirroring its in-memory shape. The
//! in-memory stores are the source of truth; writes are fire-and-forget and
//! the gateway is never read back to confirm success.

/// In-memory storage backend
pub mod memory;

use liftlog_core::errors::StorageResult;

/// Partition keys for the three persisted documents
pub mod keys {
    /// User profile partition
    pub const USER: &str = "user-storage";
    /// Routine and exercise catalog partition
    pub const ROUTINES: &str = "routine-storage";
    /// Workout archive and active session partition
    pub const WORKOUTS: &str = "workout-storage";
}

/// Pluggable key/value string store the stores snapshot their state into
///
/// Implementations must be cheap to call from the synchronous store
/// mutation path; anything slow belongs behind a buffering backend.
pub trait StorageGateway: Send + Sync {
    /// Read the document stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous document
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the removal.
    fn clear(&self, key: &str) -> StorageResult<()>;
}
