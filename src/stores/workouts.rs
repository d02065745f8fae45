// ABOUTME: Workout archive and the active-session lifecycle controller
// ABOUTME: Inactive -> Active -> finished (archived) or cancelled (discarded); one session at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use std::sync::Arc;

use chrono::Utc;
use liftlog_core::models::{
    generate_id, ActiveSession, ExerciseHistory, PersonalRecord, SetPatch, Workout,
    WorkoutExercise, WorkoutSet,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::storage::{keys, StorageGateway};

/// Completion edge reported by [`WorkoutStore::update_set`]
///
/// Toggling a set to completed starts a rest interval; toggling it back is
/// reversible bookkeeping and must not re-trigger rest. Callers react to
/// `Completed` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetTransition {
    /// The set just flipped from open to completed
    Completed,
    /// The set just flipped from completed back to open
    Reopened,
    /// The update did not change the completion flag
    Unchanged,
}

/// Persisted shape of the workout partition
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutDocument {
    workouts: Vec<Workout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_session: Option<ActiveSession>,
}

/// Owns the append-only workout archive and the single in-progress session
///
/// The archive is mutated only by [`finish_session`](Self::finish_session)
/// (append) and [`reset`](Self::reset) (bulk clear). Operations on an absent
/// session are guarded no-ops; the caller contract is to check state first,
/// but the store degrades safely if it does not.
pub struct WorkoutStore {
    storage: Arc<dyn StorageGateway>,
    workouts: Vec<Workout>,
    active: Option<ActiveSession>,
}

impl WorkoutStore {
    /// Hydrate from the workout partition, or start empty
    #[must_use]
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        let document = match storage.read(keys::WORKOUTS) {
            Ok(Some(json)) => match serde_json::from_str::<WorkoutDocument>(&json) {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!(error = %err, "workout partition unreadable, starting empty");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "workout partition read failed, starting empty");
                None
            }
        };

        match document {
            Some(document) => Self {
                storage,
                workouts: document.workouts,
                active: document.active_session,
            },
            None => Self {
                storage,
                workouts: Vec::new(),
                active: None,
            },
        }
    }

    fn persist(&self) {
        let document = WorkoutDocument {
            workouts: self.workouts.clone(),
            active_session: self.active.clone(),
        };
        match serde_json::to_string(&document) {
            Ok(json) => {
                if let Err(err) = self.storage.write(keys::WORKOUTS, &json) {
                    warn!(error = %err, "failed to persist workout partition");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize workout partition"),
        }
    }

    // ── Session lifecycle ───────────────────────────────────────────────

    /// The in-progress session, if one exists
    #[must_use]
    pub fn active_session(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    /// True while a session is in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a session from a snapshot of a routine's exercise-id sequence
    ///
    /// Every exercise begins with one empty set. Returns false without
    /// touching anything when a session is already active; starting over an
    /// active session is a caller contract violation and is never resolved
    /// by auto-cancelling.
    pub fn start_session(
        &mut self,
        routine_id: &str,
        routine_name: &str,
        exercise_ids: &[String],
    ) -> bool {
        if self.active.is_some() {
            warn!(routine = %routine_id, "start refused, a session is already active");
            return false;
        }
        self.active = Some(ActiveSession::begin(
            routine_id,
            routine_name,
            exercise_ids,
            Utc::now(),
        ));
        info!(routine = %routine_id, exercises = exercise_ids.len(), "session started");
        self.persist();
        true
    }

    /// Merge `patch` into one set of the active session
    ///
    /// Returns `None` when there is no active session or either index is out
    /// of range; otherwise reports whether the completion flag crossed an
    /// edge so the caller can drive the rest interval.
    pub fn update_set(
        &mut self,
        exercise_index: usize,
        set_index: usize,
        patch: &SetPatch,
    ) -> Option<SetTransition> {
        let session = self.active.as_mut()?;
        let set = session
            .exercises
            .get_mut(exercise_index)?
            .sets
            .get_mut(set_index)?;

        let was_completed = set.completed;
        set.apply(patch);
        let transition = match (was_completed, set.completed) {
            (false, true) => SetTransition::Completed,
            (true, false) => SetTransition::Reopened,
            _ => SetTransition::Unchanged,
        };
        self.persist();
        Some(transition)
    }

    /// Append a set to an exercise, pre-filled from the previous set
    ///
    /// Most lifters repeat the prior load, so the new set copies the last
    /// set's weight and reps (zeros when there is none) and starts open.
    pub fn add_set(&mut self, exercise_index: usize) {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        let Some(exercise) = session.exercises.get_mut(exercise_index) else {
            return;
        };
        let template = exercise.sets.last().map_or_else(WorkoutSet::empty, |last| {
            WorkoutSet {
                reps: last.reps,
                weight: last.weight,
                rpe: None,
                completed: false,
            }
        });
        exercise.sets.push(template);
        self.persist();
    }

    /// Remove a set; refuses to drop an exercise's last remaining set
    pub fn remove_set(&mut self, exercise_index: usize, set_index: usize) {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        let Some(exercise) = session.exercises.get_mut(exercise_index) else {
            return;
        };
        if exercise.sets.len() <= 1 || set_index >= exercise.sets.len() {
            return;
        }
        exercise.sets.remove(set_index);
        self.persist();
    }

    /// Advance to the next exercise; clamped at the end, no wraparound
    pub fn next_exercise(&mut self) {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        if session.current_exercise_index + 1 >= session.exercises.len() {
            return;
        }
        session.current_exercise_index += 1;
        self.persist();
    }

    /// Step back to the previous exercise; clamped at the start
    pub fn previous_exercise(&mut self) {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        if session.current_exercise_index == 0 {
            return;
        }
        session.current_exercise_index -= 1;
        self.persist();
    }

    /// Jump straight to an exercise; out-of-range indices are ignored
    pub fn go_to_exercise(&mut self, index: usize) {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        if index >= session.exercises.len() {
            return;
        }
        session.current_exercise_index = index;
        self.persist();
    }

    /// Archive the active session as an immutable workout
    ///
    /// Returns the new workout id, or `None` when no session is active. The
    /// workout's date is the session's start time and its duration is the
    /// wall-clock span rounded to whole minutes.
    pub fn finish_session(&mut self, notes: Option<String>) -> Option<String> {
        let session = self.active.take()?;
        let now = Utc::now();
        let duration_minutes =
            ((now - session.start_time).num_seconds() as f64 / 60.0).round() as i64;

        let workout = Workout {
            id: generate_id(),
            routine_id: session.routine_id,
            routine_name: session.routine_name,
            date: session.start_time,
            duration_minutes,
            exercises: session.exercises,
            notes,
        };
        let id = workout.id.clone();
        info!(workout = %id, duration_minutes, "session finished and archived");
        self.workouts.push(workout);
        self.persist();
        Some(id)
    }

    /// Discard the active session; nothing is archived
    pub fn cancel_session(&mut self) {
        if self.active.take().is_some() {
            debug!("session cancelled, in-progress data discarded");
        }
        self.persist();
    }

    // ── Archive queries ─────────────────────────────────────────────────

    /// The full archive in append order
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Archived workouts that contain the given exercise
    #[must_use]
    pub fn workouts_by_exercise(&self, exercise_id: &str) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|w| w.exercises.iter().any(|e| e.exercise_id == exercise_id))
            .collect()
    }

    /// The exercise's entry from the most recent workout containing it
    #[must_use]
    pub fn last_workout_for_exercise(&self, exercise_id: &str) -> Option<&WorkoutExercise> {
        self.workouts
            .iter()
            .filter(|w| w.exercises.iter().any(|e| e.exercise_id == exercise_id))
            .max_by_key(|w| w.date)?
            .exercises
            .iter()
            .find(|e| e.exercise_id == exercise_id)
    }

    /// The heaviest completed set ever recorded for the exercise
    #[must_use]
    pub fn personal_record(&self, exercise_id: &str) -> Option<PersonalRecord> {
        let mut record: Option<PersonalRecord> = None;
        for workout in &self.workouts {
            let Some(exercise) = workout.exercises.iter().find(|e| e.exercise_id == exercise_id)
            else {
                continue;
            };
            for set in &exercise.sets {
                if !set.completed {
                    continue;
                }
                if record.as_ref().map_or(true, |r| set.weight > r.weight) {
                    record = Some(PersonalRecord {
                        weight: set.weight,
                        reps: set.reps,
                        date: workout.date,
                    });
                }
            }
        }
        record
    }

    /// Per-session history for one exercise, most recent first
    ///
    /// This is the shape the progression advisor consumes.
    #[must_use]
    pub fn exercise_history(&self, exercise_id: &str) -> Vec<ExerciseHistory> {
        let mut history: Vec<ExerciseHistory> = self
            .workouts
            .iter()
            .filter_map(|w| {
                w.exercises
                    .iter()
                    .find(|e| e.exercise_id == exercise_id)
                    .map(|e| ExerciseHistory {
                        date: w.date,
                        sets: e.sets.clone(),
                    })
            })
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Drop the archive and any active session; clears the partition
    pub fn reset(&mut self) {
        self.workouts.clear();
        self.active = None;
        if let Err(err) = self.storage.clear(keys::WORKOUTS) {
            warn!(error = %err, "failed to clear workout partition");
        }
    }
}
