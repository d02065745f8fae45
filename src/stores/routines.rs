// ABOUTME: Routine repository and exercise catalog with referential integrity rules
// ABOUTME: Built-ins are immutable; exercises referenced by a routine cannot be deleted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use std::sync::Arc;

use chrono::Utc;
use liftlog_core::catalog::builtin_exercises;
use liftlog_core::models::{
    Exercise, ExercisePatch, NewExercise, NewRoutineExercise, Routine, RoutineExercise,
    RoutineExercisePatch, RoutinePatch,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{keys, StorageGateway};

/// Persisted shape of the routine partition
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutineDocument {
    routines: Vec<Routine>,
    exercises: Vec<Exercise>,
}

/// Owns the routine templates and the exercise catalog
///
/// Both collections share one persisted partition because routines hold the
/// only references into the catalog; hydrating them together keeps the
/// referential integrity check local to this store.
pub struct RoutineStore {
    storage: Arc<dyn StorageGateway>,
    routines: Vec<Routine>,
    exercises: Vec<Exercise>,
}

impl RoutineStore {
    /// Hydrate from the routine partition, or start from the built-in catalog
    #[must_use]
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        let document = match storage.read(keys::ROUTINES) {
            Ok(Some(json)) => match serde_json::from_str::<RoutineDocument>(&json) {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!(error = %err, "routine partition unreadable, reinitializing");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "routine partition read failed, reinitializing");
                None
            }
        };

        match document {
            Some(document) => Self {
                storage,
                routines: document.routines,
                exercises: document.exercises,
            },
            None => Self {
                storage,
                routines: Vec::new(),
                exercises: builtin_exercises(),
            },
        }
    }

    fn persist(&self) {
        let document = RoutineDocument {
            routines: self.routines.clone(),
            exercises: self.exercises.clone(),
        };
        match serde_json::to_string(&document) {
            Ok(json) => {
                if let Err(err) = self.storage.write(keys::ROUTINES, &json) {
                    warn!(error = %err, "failed to persist routine partition");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize routine partition"),
        }
    }

    // ── Catalog ─────────────────────────────────────────────────────────

    /// All exercises, built-in and custom, in display order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Create a custom exercise; always succeeds and returns the new id
    pub fn add_custom_exercise(&mut self, spec: NewExercise) -> String {
        let exercise = Exercise::custom(spec);
        let id = exercise.id.clone();
        debug!(exercise = %id, "custom exercise added");
        self.exercises.push(exercise);
        self.persist();
        id
    }

    /// Update a custom exercise; built-ins and unknown ids are ignored
    pub fn update_exercise(&mut self, id: &str, patch: ExercisePatch) {
        let Some(exercise) = self.exercises.iter_mut().find(|e| e.id == id) else {
            return;
        };
        if !exercise.is_custom {
            return;
        }
        exercise.apply(patch);
        self.persist();
    }

    /// Delete a custom exercise
    ///
    /// Returns false without mutating anything when the exercise is unknown,
    /// built-in, or still referenced by any routine.
    pub fn delete_exercise(&mut self, id: &str) -> bool {
        let Some(exercise) = self.exercise_by_id(id) else {
            return false;
        };
        if !exercise.is_custom {
            return false;
        }
        let referenced = self
            .routines
            .iter()
            .any(|r| r.exercises.iter().any(|e| e.exercise_id == id));
        if referenced {
            debug!(exercise = %id, "delete refused, exercise is referenced by a routine");
            return false;
        }
        self.exercises.retain(|e| e.id != id);
        self.persist();
        true
    }

    // ── Routines ────────────────────────────────────────────────────────

    /// All routines in creation order
    #[must_use]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Look up a routine by id
    #[must_use]
    pub fn routine_by_id(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    /// Create an empty routine and return its id
    pub fn add_routine(&mut self, name: impl Into<String>, description: Option<String>) -> String {
        let routine = Routine::new(name, description, Utc::now());
        let id = routine.id.clone();
        self.routines.push(routine);
        self.persist();
        id
    }

    /// Rename or re-describe a routine; stamps `updated_at`
    pub fn update_routine(&mut self, id: &str, patch: RoutinePatch) {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == id) else {
            return;
        };
        routine.apply(patch);
        routine.updated_at = Utc::now();
        self.persist();
    }

    /// Delete a routine; never cascades into the catalog or the archive
    pub fn delete_routine(&mut self, id: &str) {
        self.routines.retain(|r| r.id != id);
        self.persist();
    }

    /// Append an exercise prescription to a routine; stamps `updated_at`
    pub fn add_exercise_to_routine(&mut self, routine_id: &str, spec: NewRoutineExercise) {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            return;
        };
        routine
            .exercises
            .push(RoutineExercise::from_prescription(spec));
        routine.updated_at = Utc::now();
        self.persist();
    }

    /// Update one prescription entry; stamps `updated_at`
    pub fn update_routine_exercise(
        &mut self,
        routine_id: &str,
        entry_id: &str,
        patch: RoutineExercisePatch,
    ) {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            return;
        };
        let Some(entry) = routine.exercises.iter_mut().find(|e| e.id == entry_id) else {
            return;
        };
        entry.apply(patch);
        routine.updated_at = Utc::now();
        self.persist();
    }

    /// Remove one prescription entry; stamps `updated_at`
    pub fn remove_exercise_from_routine(&mut self, routine_id: &str, entry_id: &str) {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            return;
        };
        routine.exercises.retain(|e| e.id != entry_id);
        routine.updated_at = Utc::now();
        self.persist();
    }

    /// Replace a routine's whole ordered exercise list; stamps `updated_at`
    ///
    /// Reordering is atomic; there is no partial-order merge.
    pub fn reorder_exercises(&mut self, routine_id: &str, entries: Vec<RoutineExercise>) {
        let Some(routine) = self.routines.iter_mut().find(|r| r.id == routine_id) else {
            return;
        };
        routine.exercises = entries;
        routine.updated_at = Utc::now();
        self.persist();
    }

    /// Drop all routines and reinitialize the catalog to the built-in set
    pub fn reset(&mut self) {
        self.routines.clear();
        self.exercises = builtin_exercises();
        if let Err(err) = self.storage.clear(keys::ROUTINES) {
            warn!(error = %err, "failed to clear routine partition");
        }
    }
}
