// ABOUTME: Routine template models: ordered exercise prescriptions with set/rep/rest targets
// ABOUTME: Routines reference catalog exercises by id and stamp updated_at on every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prescribed exercise inside a routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercise {
    /// Unique identifier of this routine entry (not the exercise itself)
    pub id: String,
    /// Catalog exercise this entry prescribes
    pub exercise_id: String,
    /// Target number of sets
    pub sets: u32,
    /// Target repetitions per set
    pub reps: u32,
    /// Rest between sets, in seconds
    pub rest_seconds: u32,
    /// Optional target working weight in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

impl RoutineExercise {
    /// Build a routine entry from a prescription, assigning a fresh entry id
    #[must_use]
    pub fn from_prescription(spec: NewRoutineExercise) -> Self {
        Self {
            id: super::generate_id(),
            exercise_id: spec.exercise_id,
            sets: spec.sets,
            reps: spec.reps,
            rest_seconds: spec.rest_seconds,
            target_weight: spec.target_weight,
        }
    }

    /// Merge the fields present in `patch` into this entry
    pub fn apply(&mut self, patch: RoutineExercisePatch) {
        if let Some(sets) = patch.sets {
            self.sets = sets;
        }
        if let Some(reps) = patch.reps {
            self.reps = reps;
        }
        if let Some(rest_seconds) = patch.rest_seconds {
            self.rest_seconds = rest_seconds;
        }
        if let Some(target_weight) = patch.target_weight {
            self.target_weight = Some(target_weight);
        }
    }
}

/// Prescription fields for adding an exercise to a routine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoutineExercise {
    /// Catalog exercise to prescribe
    pub exercise_id: String,
    /// Target number of sets
    pub sets: u32,
    /// Target repetitions per set
    pub reps: u32,
    /// Rest between sets, in seconds
    pub rest_seconds: u32,
    /// Optional target working weight in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

/// Partial update for a routine entry; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct RoutineExercisePatch {
    /// New set target
    pub sets: Option<u32>,
    /// New rep target
    pub reps: Option<u32>,
    /// New rest interval in seconds
    pub rest_seconds: Option<u32>,
    /// New target weight in kg
    pub target_weight: Option<f64>,
}

/// A named workout template: an ordered list of exercise prescriptions
///
/// `updated_at` is refreshed on every structural mutation of the routine or
/// its exercise list. Deleting a routine never cascades into the catalog or
/// the workout archive; archived workouts carry a denormalized copy of the
/// routine name so they stay meaningful after the template is gone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered exercise prescriptions
    pub exercises: Vec<RoutineExercise>,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl Routine {
    /// Build an empty routine created at `now`
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: super::generate_id(),
            name: name.into(),
            description,
            exercises: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `patch`; the caller stamps `updated_at`
    pub fn apply(&mut self, patch: RoutinePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Partial update for a routine's own fields; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct RoutinePatch {
    /// New display name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}
