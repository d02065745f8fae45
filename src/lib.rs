// ABOUTME: Main library entry point for the Liftlog training tracker core
// ABOUTME: Session lifecycle, state stores, progression advisor, and the storage port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

#![deny(unsafe_code)]

//! # Liftlog
//!
//! A single-user resistance-training tracker core: routine templates, a
//! workout session lifecycle, and a progression advisor that recommends
//! load adjustments from history.
//!
//! ## Architecture
//!
//! - **Stores**: explicit state containers, one per persisted partition
//!   (routines + catalog, workout archive + active session, user profile)
//! - **Storage**: a key/value string gateway the stores snapshot into;
//!   in-memory state is the source of truth, writes are fire-and-forget
//! - **Intelligence**: pure progression functions re-exported from
//!   `liftlog-intelligence`
//! - **Timer**: the cancellable rest-interval countdown
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use liftlog::storage::memory::MemoryStorage;
//! use liftlog::stores::TrackerState;
//!
//! let mut state = TrackerState::new(Arc::new(MemoryStorage::new()));
//! let routine_id = state.routines.add_routine("Push Day", None);
//! let routine = state.routines.routine_by_id(&routine_id).cloned();
//! # assert!(routine.is_some());
//! ```

/// Lenient numeric parsing for form input
pub mod input;

/// Structured logging setup
pub mod logging;

/// Key/value storage gateway and backends
pub mod storage;

/// Persistent state stores and the session lifecycle controller
pub mod stores;

/// Cancellable rest-interval timer
pub mod timer;

// Re-export the foundation and intelligence crates under stable paths
pub use liftlog_core::{catalog, errors, models};
pub use liftlog_intelligence as intelligence;

pub use stores::{RoutineStore, SetTransition, TrackerState, UserStore, WorkoutStore};
pub use timer::RestTimer;
