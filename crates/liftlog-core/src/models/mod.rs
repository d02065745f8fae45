// ABOUTME: Core data models for the Liftlog training tracker
// ABOUTME: Re-exports Exercise, Routine, Workout, ActiveSession and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! # Data Models
//!
//! Core data structures shared across the Liftlog workspace.
//!
//! ## Design Principles
//!
//! - **Serializable**: every persisted model round-trips through the JSON
//!   documents written to the storage gateway
//! - **Type Safe**: strong typing for muscle groups, equipment, and goals
//!   prevents stringly-typed data handling errors
//! - **Explicit partial updates**: each mutable entity has a companion patch
//!   struct with named optional fields instead of untyped map merges
//!
//! ## Core Models
//!
//! - `Exercise`: a movement in the catalog (built-in or user-defined)
//! - `Routine`: a named template of ordered exercise prescriptions
//! - `ActiveSession`: the single in-progress workout
//! - `Workout`: an immutable archived training session
//! - `User`: the local user profile with bodyweight history

/// Generate a fresh string identifier for a user-created entity
#[must_use]
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// Domain modules
mod exercise;
mod routine;
mod suggestion;
mod user;
mod workout;

// Re-export all public types for convenience
// Catalog domain
pub use exercise::{Equipment, Exercise, ExercisePatch, MuscleGroup, NewExercise};

// Routine domain
pub use routine::{
    NewRoutineExercise, Routine, RoutineExercise, RoutineExercisePatch, RoutinePatch,
};

// Workout domain
pub use workout::{
    ActiveSession, ExerciseHistory, PersonalRecord, SetPatch, Workout, WorkoutExercise, WorkoutSet,
};

// Progression domain
pub use suggestion::{SuggestionKind, WeightSuggestion};

// User profile domain
pub use user::{Goal, User, UserPatch, WeightEntry};
