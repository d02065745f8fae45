// ABOUTME: Workout session models: live ActiveSession state and immutable archived Workouts
// ABOUTME: Includes per-set tracking with weight, reps, RPE, and completion flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One performed (or planned) set within a workout exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Repetitions performed
    pub reps: u32,
    /// Load in kg
    pub weight: f64,
    /// Rated perceived exertion, 0-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    /// Whether the set was completed
    pub completed: bool,
}

impl WorkoutSet {
    /// An untouched set: zero reps, zero weight, not completed
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            reps: 0,
            weight: 0.0,
            rpe: None,
            completed: false,
        }
    }

    /// Merge the fields present in `patch` into this set
    pub fn apply(&mut self, patch: &SetPatch) {
        if let Some(reps) = patch.reps {
            self.reps = reps;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(rpe) = patch.rpe {
            self.rpe = Some(rpe);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Partial update for a workout set; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct SetPatch {
    /// New rep count
    pub reps: Option<u32>,
    /// New load in kg
    pub weight: Option<f64>,
    /// New RPE value, 0-10
    pub rpe: Option<f64>,
    /// New completion flag
    pub completed: Option<bool>,
}

/// All sets performed for one exercise within a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Catalog exercise performed
    pub exercise_id: String,
    /// Ordered sets; never empty while a session is active
    pub sets: Vec<WorkoutSet>,
}

/// The single in-progress workout session
///
/// Built from a snapshot of a routine's exercise-id sequence at start time;
/// editing the routine mid-session does not alter the running session. At
/// most one `ActiveSession` exists process-wide, owned by the workout store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    /// Routine the session was started from
    pub routine_id: String,
    /// Denormalized routine name, frozen at start time
    pub routine_name: String,
    /// Session start (UTC); also becomes the archived workout's date
    pub start_time: DateTime<Utc>,
    /// One entry per prescribed exercise, in routine order
    pub exercises: Vec<WorkoutExercise>,
    /// Index of the exercise the user is currently on
    pub current_exercise_index: usize,
}

impl ActiveSession {
    /// Snapshot a routine's exercise-id sequence into a fresh session
    ///
    /// Every exercise starts with exactly one empty set.
    #[must_use]
    pub fn begin(
        routine_id: impl Into<String>,
        routine_name: impl Into<String>,
        exercise_ids: &[String],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            routine_id: routine_id.into(),
            routine_name: routine_name.into(),
            start_time: now,
            exercises: exercise_ids
                .iter()
                .map(|id| WorkoutExercise {
                    exercise_id: id.clone(),
                    sets: vec![WorkoutSet::empty()],
                })
                .collect(),
            current_exercise_index: 0,
        }
    }
}

/// An archived training session; immutable once created
///
/// Created only when an active session finishes. Deleted only by a bulk
/// reset of the workout partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: String,
    /// Routine the session was started from (may no longer exist)
    pub routine_id: String,
    /// Routine name as it read at session start
    pub routine_name: String,
    /// Session start (UTC)
    pub date: DateTime<Utc>,
    /// Measured duration, rounded to whole minutes
    pub duration_minutes: i64,
    /// Exercises performed, in session order
    pub exercises: Vec<WorkoutExercise>,
    /// Free-form session notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The heaviest completed set ever recorded for an exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Load in kg
    pub weight: f64,
    /// Reps performed at that load
    pub reps: u32,
    /// Date of the workout containing the record set
    pub date: DateTime<Utc>,
}

/// One exercise's sets from a single archived workout, paired with its date
///
/// The progression advisor consumes these in chronologically-descending
/// order (most recent first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseHistory {
    /// Date of the workout
    pub date: DateTime<Utc>,
    /// Sets performed for the exercise in that workout
    pub sets: Vec<WorkoutSet>,
}
