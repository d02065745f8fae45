// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, state construction, and routine seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

#![allow(
    dead_code,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]

//! Shared test utilities for `liftlog`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::{Arc, Once};

use liftlog::storage::memory::MemoryStorage;
use liftlog::stores::TrackerState;
use liftlog_core::models::NewRoutineExercise;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A tracker state backed by a fresh in-memory gateway
pub fn fresh_state() -> TrackerState {
    init_test_logging();
    TrackerState::new(Arc::new(MemoryStorage::new()))
}

/// A shared in-memory gateway for hydration tests
pub fn shared_storage() -> Arc<MemoryStorage> {
    init_test_logging();
    Arc::new(MemoryStorage::new())
}

/// Seed a two-exercise push routine and return its id
pub fn seed_push_routine(state: &mut TrackerState) -> String {
    let id = state
        .routines
        .add_routine("Push Day", Some("Chest and shoulders".to_owned()));
    state.routines.add_exercise_to_routine(
        &id,
        NewRoutineExercise {
            exercise_id: "bench-press".to_owned(),
            sets: 3,
            reps: 8,
            rest_seconds: 120,
            target_weight: Some(80.0),
        },
    );
    state.routines.add_exercise_to_routine(
        &id,
        NewRoutineExercise {
            exercise_id: "overhead-press".to_owned(),
            sets: 3,
            reps: 10,
            rest_seconds: 90,
            target_weight: None,
        },
    );
    id
}

/// Start a session from a seeded routine's exercise-id snapshot
pub fn start_from_routine(state: &mut TrackerState, routine_id: &str) -> bool {
    let routine = state
        .routines
        .routine_by_id(routine_id)
        .cloned()
        .expect("routine must exist");
    let exercise_ids: Vec<String> = routine
        .exercises
        .iter()
        .map(|e| e.exercise_id.clone())
        .collect();
    state
        .workouts
        .start_session(&routine.id, &routine.name, &exercise_ids)
}
