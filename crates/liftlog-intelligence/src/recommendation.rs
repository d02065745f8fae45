// ABOUTME: Weight progression recommendation engine driven by recent exercise history
// ABOUTME: Produces increase/maintain/deload suggestions with fixed rationale strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! The progression decision engine.
//!
//! History is consumed most-recent-first. The decision rules fire in a fixed
//! order; the first matching rule wins:
//!
//! 1. Five or more weeks without a deload -> recommend a deload week
//! 2. Two-plus recent sessions, every set completed, low average RPE -> add load
//! 3. Average RPE above 9 -> hold and consolidate
//! 4. Recent sets left incomplete -> hold until completed
//! 5. Otherwise -> hold

use chrono::{DateTime, Utc};
use liftlog_core::models::{Exercise, ExerciseHistory, SuggestionKind, WeightSuggestion};
use tracing::debug;

use crate::metrics::weight_increment;

/// Sessions considered "recent" for completion and RPE checks
const RECENT_SESSIONS: usize = 3;

/// Assumed RPE when no set in the recent window recorded one
const DEFAULT_RPE: f64 = 7.0;

/// Average RPE must sit below this for a load increase
const RPE_INCREASE_CEILING: f64 = 8.0;

/// Average RPE above this forces a hold regardless of completion
const RPE_CONSOLIDATE_FLOOR: f64 = 9.0;

/// Weeks of uninterrupted progression before a deload is prescribed
const DELOAD_AFTER_WEEKS: i64 = 5;

/// Deload target as a fraction of the last working weight
const DELOAD_FACTOR: f64 = 0.9;

/// A session counts as a deload when its best weight drops below 90% of the
/// previous session's best
const DROP_FACTOR: f64 = 0.9;

/// Heaviest completed weight in one history entry, 0 if nothing completed
fn best_completed_weight(entry: &ExerciseHistory) -> f64 {
    entry
        .sets
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.weight)
        .fold(0.0, f64::max)
}

/// Mean RPE over completed sets that recorded one; `DEFAULT_RPE` if none did
fn average_rpe(history: &[ExerciseHistory]) -> f64 {
    let rpes: Vec<f64> = history
        .iter()
        .flat_map(|h| &h.sets)
        .filter(|s| s.completed)
        .filter_map(|s| s.rpe)
        .collect();
    if rpes.is_empty() {
        return DEFAULT_RPE;
    }
    rpes.iter().sum::<f64>() / rpes.len() as f64
}

/// True when every set of every entry was completed
fn all_sets_completed(history: &[ExerciseHistory]) -> bool {
    history.iter().all(|h| h.sets.iter().all(|s| s.completed))
}

/// Whole weeks trained since the last deload-sized weight drop
///
/// Walks the history newest to oldest, comparing each session's best
/// completed weight against the session before it. A drop of 10% or more
/// halts the walk and resets the count to zero. Until then the running week
/// count is overwritten on every examined pair with the age of that pair's
/// older entry, so the returned value is the week count of the last pair
/// examined. Fewer than two entries yields zero.
#[must_use]
pub fn weeks_without_deload(history: &[ExerciseHistory], now: DateTime<Utc>) -> i64 {
    if history.len() < 2 {
        return 0;
    }

    let mut weeks = 0;
    for i in 1..history.len() {
        let current = best_completed_weight(&history[i - 1]);
        let previous = best_completed_weight(&history[i]);
        if current < previous * DROP_FACTOR {
            return 0;
        }
        let days = (now - history[i].date).num_days().abs();
        weeks = days / 7;
    }
    weeks
}

/// Recommend the next working weight for an exercise
///
/// `history` must be chronologically descending (most recent first), one
/// entry per past session containing the exercise. Pure: identical inputs
/// always produce the identical suggestion.
#[must_use]
pub fn suggest_weight(
    exercise: &Exercise,
    _target_reps: u32,
    history: &[ExerciseHistory],
    now: DateTime<Utc>,
) -> WeightSuggestion {
    if history.is_empty() {
        return WeightSuggestion {
            kind: SuggestionKind::Maintain,
            amount: None,
            suggested_weight: 0.0,
            reason: "No history yet. Start with a weight that lets you finish every rep with good form.".to_owned(),
        };
    }

    let last_weight = best_completed_weight(&history[0]);
    let increment = weight_increment(exercise);
    let recent = &history[..history.len().min(RECENT_SESSIONS)];
    let avg_rpe = average_rpe(recent);
    let weeks = weeks_without_deload(history, now);

    debug!(
        exercise = %exercise.id,
        last_weight,
        avg_rpe,
        weeks_without_deload = weeks,
        "evaluating progression"
    );

    if weeks >= DELOAD_AFTER_WEEKS {
        let deload_weight = (last_weight * DELOAD_FACTOR / increment).round() * increment;
        return WeightSuggestion {
            kind: SuggestionKind::Deload,
            amount: Some(-10.0),
            suggested_weight: deload_weight,
            reason: "Deload week recommended to let recovery catch up.".to_owned(),
        };
    }

    if recent.len() >= 2 && all_sets_completed(recent) && avg_rpe < RPE_INCREASE_CEILING {
        return WeightSuggestion {
            kind: SuggestionKind::Increase,
            amount: Some(increment),
            suggested_weight: last_weight + increment,
            reason: format!(
                "Every set completed consistently at a manageable RPE. Add {increment} kg."
            ),
        };
    }

    if avg_rpe > RPE_CONSOLIDATE_FLOOR {
        return WeightSuggestion {
            kind: SuggestionKind::Maintain,
            amount: None,
            suggested_weight: last_weight,
            reason: "Perceived effort is high. Hold the weight and consolidate before adding more.".to_owned(),
        };
    }

    if !all_sets_completed(recent) {
        return WeightSuggestion {
            kind: SuggestionKind::Maintain,
            amount: None,
            suggested_weight: last_weight,
            reason: "Complete every set before increasing the weight.".to_owned(),
        };
    }

    WeightSuggestion {
        kind: SuggestionKind::Maintain,
        amount: None,
        suggested_weight: last_weight,
        reason: "Hold the current weight and keep accumulating quality sets.".to_owned(),
    }
}
