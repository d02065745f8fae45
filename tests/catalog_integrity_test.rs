// ABOUTME: Integration tests for catalog and routine repository integrity rules
// ABOUTME: Built-in immutability, reference-protected deletes, and updated_at stamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::fresh_state;
use liftlog_core::models::{
    Equipment, ExercisePatch, MuscleGroup, NewExercise, NewRoutineExercise, RoutinePatch,
};

fn custom_spec(name: &str) -> NewExercise {
    NewExercise {
        name: name.to_owned(),
        muscle_group: MuscleGroup::Biceps,
        secondary_muscles: None,
        equipment: Equipment::Dumbbell,
        instructions: None,
    }
}

#[test]
fn test_deleting_a_referenced_custom_exercise_is_refused() {
    let mut state = fresh_state();
    let exercise_id = state.routines.add_custom_exercise(custom_spec("Zottman Curl"));
    let routine_id = state.routines.add_routine("Arms", None);
    state.routines.add_exercise_to_routine(
        &routine_id,
        NewRoutineExercise {
            exercise_id: exercise_id.clone(),
            sets: 3,
            reps: 12,
            rest_seconds: 60,
            target_weight: None,
        },
    );

    let before = state.routines.exercises().len();
    assert!(!state.routines.delete_exercise(&exercise_id));
    assert_eq!(state.routines.exercises().len(), before);
    assert!(state.routines.exercise_by_id(&exercise_id).is_some());
}

#[test]
fn test_deleting_an_unreferenced_custom_exercise_succeeds() {
    let mut state = fresh_state();
    let exercise_id = state.routines.add_custom_exercise(custom_spec("Zottman Curl"));

    assert!(state.routines.delete_exercise(&exercise_id));
    assert!(state.routines.exercise_by_id(&exercise_id).is_none());
}

#[test]
fn test_deleting_a_built_in_exercise_always_fails() {
    let mut state = fresh_state();
    assert!(!state.routines.delete_exercise("bench-press"));
    assert!(state.routines.exercise_by_id("bench-press").is_some());
}

#[test]
fn test_delete_succeeds_once_the_referencing_routine_is_gone() {
    let mut state = fresh_state();
    let exercise_id = state.routines.add_custom_exercise(custom_spec("Zottman Curl"));
    let routine_id = state.routines.add_routine("Arms", None);
    state.routines.add_exercise_to_routine(
        &routine_id,
        NewRoutineExercise {
            exercise_id: exercise_id.clone(),
            sets: 3,
            reps: 12,
            rest_seconds: 60,
            target_weight: None,
        },
    );

    assert!(!state.routines.delete_exercise(&exercise_id));
    state.routines.delete_routine(&routine_id);
    assert!(state.routines.delete_exercise(&exercise_id));
}

#[test]
fn test_built_ins_are_immutable() {
    let mut state = fresh_state();
    state.routines.update_exercise(
        "bench-press",
        ExercisePatch {
            name: Some("Renamed".to_owned()),
            ..ExercisePatch::default()
        },
    );
    assert_eq!(
        state.routines.exercise_by_id("bench-press").unwrap().name,
        "Bench Press"
    );
}

#[test]
fn test_custom_exercises_accept_partial_updates() {
    let mut state = fresh_state();
    let id = state.routines.add_custom_exercise(custom_spec("Zottman Curl"));

    state.routines.update_exercise(
        &id,
        ExercisePatch {
            equipment: Some(Equipment::Cable),
            ..ExercisePatch::default()
        },
    );

    let exercise = state.routines.exercise_by_id(&id).unwrap();
    assert_eq!(exercise.equipment, Equipment::Cable);
    // Untouched fields survive the patch
    assert_eq!(exercise.name, "Zottman Curl");
    assert_eq!(exercise.muscle_group, MuscleGroup::Biceps);
}

#[test]
fn test_every_structural_mutation_stamps_updated_at() {
    let mut state = fresh_state();
    let routine_id = state.routines.add_routine("Legs", None);

    let created = state.routines.routine_by_id(&routine_id).unwrap().created_at;

    state.routines.update_routine(
        &routine_id,
        RoutinePatch {
            description: Some("Quads focus".to_owned()),
            ..RoutinePatch::default()
        },
    );
    let after_rename = state.routines.routine_by_id(&routine_id).unwrap().updated_at;
    assert!(after_rename > created);

    state.routines.add_exercise_to_routine(
        &routine_id,
        NewRoutineExercise {
            exercise_id: "back-squat".to_owned(),
            sets: 5,
            reps: 5,
            rest_seconds: 180,
            target_weight: Some(120.0),
        },
    );
    let after_add = state.routines.routine_by_id(&routine_id).unwrap().updated_at;
    assert!(after_add > after_rename);
}

#[test]
fn test_reorder_replaces_the_whole_list_atomically() {
    let mut state = fresh_state();
    let routine_id = state.routines.add_routine("Full Body", None);
    for exercise_id in ["back-squat", "bench-press", "barbell-row"] {
        state.routines.add_exercise_to_routine(
            &routine_id,
            NewRoutineExercise {
                exercise_id: exercise_id.to_owned(),
                sets: 3,
                reps: 8,
                rest_seconds: 120,
                target_weight: None,
            },
        );
    }

    let mut entries = state.routines.routine_by_id(&routine_id).unwrap().exercises.clone();
    entries.reverse();
    state.routines.reorder_exercises(&routine_id, entries);

    let reordered: Vec<&str> = state
        .routines
        .routine_by_id(&routine_id)
        .unwrap()
        .exercises
        .iter()
        .map(|e| e.exercise_id.as_str())
        .collect();
    assert_eq!(reordered, vec!["barbell-row", "bench-press", "back-squat"]);
}

#[test]
fn test_deleting_a_routine_leaves_catalog_and_archive_alone() {
    let mut state = fresh_state();
    let routine_id = common::seed_push_routine(&mut state);
    assert!(common::start_from_routine(&mut state, &routine_id));
    state.workouts.finish_session(None).unwrap();

    let catalog_size = state.routines.exercises().len();
    state.routines.delete_routine(&routine_id);

    assert_eq!(state.routines.exercises().len(), catalog_size);
    // The archived workout keeps its denormalized routine name
    assert_eq!(state.workouts.workouts()[0].routine_name, "Push Day");
}
