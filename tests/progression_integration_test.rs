// ABOUTME: Integration tests feeding archive-derived history into the progression advisor
// ABOUTME: Suggestions, personal records, streaks, and history shape through the stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use common::{fresh_state, seed_push_routine, start_from_routine};
use liftlog::intelligence::{suggest_weight, training_streak};
use liftlog_core::models::{SetPatch, SuggestionKind};

/// Run one full session completing the bench set at the given weight
fn log_bench_session(state: &mut liftlog::stores::TrackerState, routine_id: &str, weight: f64) {
    assert!(start_from_routine(state, routine_id));
    state.workouts.update_set(
        0,
        0,
        &SetPatch {
            weight: Some(weight),
            reps: Some(8),
            rpe: Some(7.0),
            completed: Some(true),
        },
    );
    state.workouts.update_set(
        1,
        0,
        &SetPatch {
            weight: Some(40.0),
            reps: Some(10),
            completed: Some(true),
            ..SetPatch::default()
        },
    );
    state.workouts.finish_session(None).unwrap();
}

#[test]
fn test_archive_history_drives_an_increase_suggestion() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 80.0);
    log_bench_session(&mut state, &routine_id, 80.0);

    let bench = state.routines.exercise_by_id("bench-press").unwrap().clone();
    let history = state.workouts.exercise_history("bench-press");
    assert_eq!(history.len(), 2);

    let suggestion = suggest_weight(&bench, 8, &history, Utc::now());
    assert_eq!(suggestion.kind, SuggestionKind::Increase);
    assert_eq!(suggestion.amount, Some(2.5));
    assert!((suggestion.suggested_weight - 82.5).abs() < f64::EPSILON);
}

#[test]
fn test_no_history_suggests_maintaining_at_zero() {
    let mut state = fresh_state();
    seed_push_routine(&mut state);

    let bench = state.routines.exercise_by_id("bench-press").unwrap().clone();
    let history = state.workouts.exercise_history("bench-press");
    assert!(history.is_empty());

    let suggestion = suggest_weight(&bench, 8, &history, Utc::now());
    assert_eq!(suggestion.kind, SuggestionKind::Maintain);
    assert!((suggestion.suggested_weight - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_exercise_history_is_most_recent_first() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 77.5);
    log_bench_session(&mut state, &routine_id, 80.0);

    let history = state.workouts.exercise_history("bench-press");
    assert_eq!(history.len(), 2);
    assert!(history[0].date >= history[1].date);
    assert!((history[0].sets[0].weight - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_personal_record_is_the_heaviest_completed_set() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 80.0);
    log_bench_session(&mut state, &routine_id, 85.0);
    log_bench_session(&mut state, &routine_id, 82.5);

    let record = state.workouts.personal_record("bench-press").unwrap();
    assert!((record.weight - 85.0).abs() < f64::EPSILON);
    assert_eq!(record.reps, 8);

    assert!(state.workouts.personal_record("back-squat").is_none());
}

#[test]
fn test_incomplete_sets_never_set_records() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    assert!(start_from_routine(&mut state, &routine_id));
    // Heavy attempt logged but never completed
    state.workouts.update_set(
        0,
        0,
        &SetPatch {
            weight: Some(200.0),
            reps: Some(1),
            completed: Some(false),
            ..SetPatch::default()
        },
    );
    state.workouts.finish_session(None).unwrap();

    assert!(state.workouts.personal_record("bench-press").is_none());
}

#[test]
fn test_last_workout_for_exercise_returns_the_latest_entry() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 77.5);
    log_bench_session(&mut state, &routine_id, 80.0);

    let last = state.workouts.last_workout_for_exercise("bench-press").unwrap();
    assert!((last.sets[0].weight - 80.0).abs() < f64::EPSILON);

    assert!(state
        .workouts
        .last_workout_for_exercise("back-squat")
        .is_none());
}

#[test]
fn test_workouts_by_exercise_filters_the_archive() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 80.0);

    assert_eq!(state.workouts.workouts_by_exercise("bench-press").len(), 1);
    assert_eq!(state.workouts.workouts_by_exercise("overhead-press").len(), 1);
    assert!(state.workouts.workouts_by_exercise("back-squat").is_empty());
}

#[test]
fn test_same_day_sessions_count_toward_the_streak() {
    let mut state = fresh_state();
    let routine_id = seed_push_routine(&mut state);

    log_bench_session(&mut state, &routine_id, 80.0);
    log_bench_session(&mut state, &routine_id, 80.0);

    let dates: Vec<_> = state.workouts.workouts().iter().map(|w| w.date).collect();
    assert_eq!(training_streak(&dates, Utc::now().date_naive()), 2);
}

#[test]
fn test_empty_archive_has_no_streak() {
    let state = fresh_state();
    let dates: Vec<_> = state.workouts.workouts().iter().map(|w| w.date).collect();
    assert_eq!(training_streak(&dates, Utc::now().date_naive()), 0);
}
