// ABOUTME: Strength metrics: Epley 1RM estimation, completed-set volume, duration estimates
// ABOUTME: Fixed increment table distinguishing compound and isolation muscle groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! Strength metrics over individual sets and planned sessions.

use liftlog_core::models::{Exercise, MuscleGroup, WorkoutSet};

/// Muscle groups trained by compound barbell lifts; these progress in
/// larger jumps than isolation movements
const COMPOUND_GROUPS: [MuscleGroup; 4] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Quadriceps,
    MuscleGroup::Glutes,
];

/// Smallest practical load jump for compound lifts (kg)
const COMPOUND_INCREMENT_KG: f64 = 2.5;

/// Smallest practical load jump for isolation lifts (kg)
const ISOLATION_INCREMENT_KG: f64 = 1.25;

/// Average active time per set (minutes)
const AVG_SET_MINUTES: f64 = 1.5;

/// Average rest per set (minutes)
const AVG_REST_MINUTES: f64 = 2.0;

/// Setup/transition time per exercise (minutes)
const TRANSITION_MINUTES: f64 = 1.0;

/// Estimate a one-rep max from a submaximal set (Epley)
///
/// Formula: `1RM = weight x (1 + reps/30)`, rounded to the nearest whole
/// number. A true single is returned as-is.
///
/// # Example
///
/// ```
/// use liftlog_intelligence::metrics::estimate_one_rep_max;
///
/// assert!((estimate_one_rep_max(100.0, 10) - 133.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps == 1 {
        return weight;
    }
    (weight * (1.0 + f64::from(reps) / 30.0)).round()
}

/// Total tonnage of the completed sets: Σ weight x reps
///
/// Incomplete sets contribute nothing.
#[must_use]
pub fn session_volume(sets: &[WorkoutSet]) -> f64 {
    sets.iter()
        .filter(|s| s.completed)
        .map(|s| s.weight * f64::from(s.reps))
        .sum()
}

/// Load jump to use when progressing an exercise
///
/// 2.5 kg for compound muscle groups, 1.25 kg for isolation groups. A fixed
/// lookup, not configurable per exercise.
#[must_use]
pub fn weight_increment(exercise: &Exercise) -> f64 {
    if COMPOUND_GROUPS.contains(&exercise.muscle_group) {
        COMPOUND_INCREMENT_KG
    } else {
        ISOLATION_INCREMENT_KG
    }
}

/// Planning estimate for a session's length in minutes
///
/// `total_sets x (set time + rest time) + one transition per exercise`.
/// Independent of the measured duration recorded when a session finishes.
#[must_use]
pub fn estimate_workout_duration(exercise_count: usize, sets_per_exercise: u32) -> i64 {
    let total_sets = exercise_count as f64 * f64::from(sets_per_exercise);
    let minutes =
        total_sets * (AVG_SET_MINUTES + AVG_REST_MINUTES) + exercise_count as f64 * TRANSITION_MINUTES;
    minutes.round() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use liftlog_core::models::{Equipment, Exercise};

    fn set(weight: f64, reps: u32, completed: bool) -> WorkoutSet {
        WorkoutSet {
            reps,
            weight,
            rpe: None,
            completed,
        }
    }

    fn exercise(muscle_group: MuscleGroup) -> Exercise {
        Exercise {
            id: "x".into(),
            name: "X".into(),
            muscle_group,
            secondary_muscles: None,
            equipment: Equipment::Barbell,
            instructions: None,
            is_custom: false,
        }
    }

    #[test]
    fn test_one_rep_max_single_is_identity() {
        assert!((estimate_one_rep_max(100.0, 1) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_rep_max_rounds_not_truncates() {
        // 100 * (1 + 10/30) = 133.33 -> 133
        assert!((estimate_one_rep_max(100.0, 10) - 133.0).abs() < f64::EPSILON);
        // 80 * (1 + 5/30) = 93.33 -> 93
        assert!((estimate_one_rep_max(80.0, 5) - 93.0).abs() < f64::EPSILON);
        // 60 * (1 + 8/30) = 76.0
        assert!((estimate_one_rep_max(60.0, 8) - 76.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_excludes_incomplete_sets() {
        let sets = vec![set(100.0, 5, true), set(100.0, 5, false)];
        assert!((session_volume(&sets) - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_empty_is_zero() {
        assert!((session_volume(&[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_increment_by_muscle_group() {
        assert!((weight_increment(&exercise(MuscleGroup::Chest)) - 2.5).abs() < f64::EPSILON);
        assert!((weight_increment(&exercise(MuscleGroup::Back)) - 2.5).abs() < f64::EPSILON);
        assert!((weight_increment(&exercise(MuscleGroup::Quadriceps)) - 2.5).abs() < f64::EPSILON);
        assert!((weight_increment(&exercise(MuscleGroup::Glutes)) - 2.5).abs() < f64::EPSILON);
        assert!((weight_increment(&exercise(MuscleGroup::Biceps)) - 1.25).abs() < f64::EPSILON);
        assert!((weight_increment(&exercise(MuscleGroup::Calves)) - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_estimate() {
        // 4 exercises x 3 sets x 3.5 min + 4 min transitions = 46
        assert_eq!(estimate_workout_duration(4, 3), 46);
        // 2 x 4 x 3.5 + 2 = 30
        assert_eq!(estimate_workout_duration(2, 4), 30);
        assert_eq!(estimate_workout_duration(0, 5), 0);
    }
}
