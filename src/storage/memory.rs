// ABOUTME: In-memory storage backend for tests, previews, and ephemeral sessions
// ABOUTME: A mutex-guarded map of partition key to JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use std::collections::HashMap;
use std::sync::Mutex;

use liftlog_core::errors::{StorageError, StorageResult};

use super::StorageGateway;

/// In-memory gateway backend
///
/// Interior mutability so the gateway can be shared behind an `Arc` across
/// the three stores, matching how a device-storage backend would be shared.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, key: &str) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::backend(key, "storage mutex poisoned"))
    }
}

impl StorageGateway for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock(key)?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock(key)?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self, key: &str) -> StorageResult<()> {
        self.lock(key)?.remove(key);
        Ok(())
    }
}
