// ABOUTME: Persistent state stores: routine/catalog, workout archive + session, user profile
// ABOUTME: All mutation is routed through declared store operations; no ambient global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! # State stores
//!
//! Each store owns one logical partition of application state, hydrates it
//! from the storage gateway at construction, and snapshots it back as a
//! single JSON document after every mutation. The in-memory state is the
//! source of truth; persistence is best-effort (§ fire-and-forget) and
//! failures are logged, never surfaced through the mutation APIs.

/// Routine repository and exercise catalog
pub mod routines;

/// User profile store
pub mod user;

/// Workout archive and the active session controller
pub mod workouts;

pub use routines::RoutineStore;
pub use user::UserStore;
pub use workouts::{SetTransition, WorkoutStore};

use std::sync::Arc;

use crate::storage::StorageGateway;

/// The full application state: one store per persisted partition
///
/// An explicit container handed to whichever layer needs it, replacing any
/// notion of ambient global stores.
pub struct TrackerState {
    /// User profile partition
    pub user: UserStore,
    /// Routine and catalog partition
    pub routines: RoutineStore,
    /// Workout archive and active session partition
    pub workouts: WorkoutStore,
}

impl TrackerState {
    /// Hydrate all stores from the shared storage gateway
    #[must_use]
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self {
            user: UserStore::new(Arc::clone(&storage)),
            routines: RoutineStore::new(Arc::clone(&storage)),
            workouts: WorkoutStore::new(storage),
        }
    }

    /// Clear the workout partition only; routines, catalog, and profile stay
    pub fn reset_workouts(&mut self) {
        self.workouts.reset();
    }

    /// Clear every partition and reinitialize the catalog to its built-ins
    pub fn reset_everything(&mut self) {
        self.user.reset();
        self.routines.reset();
        self.workouts.reset();
    }
}
