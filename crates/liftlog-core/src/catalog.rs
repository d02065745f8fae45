// ABOUTME: Built-in exercise catalog shipped with every install
// ABOUTME: Stable slug ids so routines survive catalog reinitialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! The default exercise catalog.
//!
//! Built-in exercises are immutable and cannot be deleted. Their ids are
//! stable slugs, so a "reset everything" that reinitializes the catalog
//! leaves existing routine references valid.

use crate::models::{Equipment, Exercise, MuscleGroup};

fn builtin(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    secondary: &[MuscleGroup],
    equipment: Equipment,
) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        muscle_group,
        secondary_muscles: if secondary.is_empty() {
            None
        } else {
            Some(secondary.to_vec())
        },
        equipment,
        instructions: None,
        is_custom: false,
    }
}

/// The default catalog, in display order
#[must_use]
pub fn builtin_exercises() -> Vec<Exercise> {
    use Equipment::{Barbell, Bodyweight, Cable, Dumbbell, Machine};
    use MuscleGroup::{
        Abs, Back, Biceps, Calves, Chest, Forearms, Glutes, Hamstrings, Obliques, Quadriceps,
        Shoulders, Triceps,
    };

    vec![
        builtin("bench-press", "Bench Press", Chest, &[Triceps, Shoulders], Barbell),
        builtin("incline-dumbbell-press", "Incline Dumbbell Press", Chest, &[Shoulders, Triceps], Dumbbell),
        builtin("cable-fly", "Cable Fly", Chest, &[], Cable),
        builtin("push-up", "Push-Up", Chest, &[Triceps, Shoulders], Bodyweight),
        builtin("deadlift", "Deadlift", Back, &[Hamstrings, Glutes, Forearms], Barbell),
        builtin("barbell-row", "Barbell Row", Back, &[Biceps, Forearms], Barbell),
        builtin("lat-pulldown", "Lat Pulldown", Back, &[Biceps], Cable),
        builtin("pull-up", "Pull-Up", Back, &[Biceps, Forearms], Bodyweight),
        builtin("overhead-press", "Overhead Press", Shoulders, &[Triceps], Barbell),
        builtin("lateral-raise", "Lateral Raise", Shoulders, &[], Dumbbell),
        builtin("barbell-curl", "Barbell Curl", Biceps, &[Forearms], Barbell),
        builtin("hammer-curl", "Hammer Curl", Biceps, &[Forearms], Dumbbell),
        builtin("triceps-pushdown", "Triceps Pushdown", Triceps, &[], Cable),
        builtin("lying-triceps-extension", "Lying Triceps Extension", Triceps, &[], Barbell),
        builtin("wrist-curl", "Wrist Curl", Forearms, &[], Dumbbell),
        builtin("back-squat", "Back Squat", Quadriceps, &[Glutes, Hamstrings, Abs], Barbell),
        builtin("leg-press", "Leg Press", Quadriceps, &[Glutes], Machine),
        builtin("leg-extension", "Leg Extension", Quadriceps, &[], Machine),
        builtin("romanian-deadlift", "Romanian Deadlift", Hamstrings, &[Glutes, Back], Barbell),
        builtin("leg-curl", "Leg Curl", Hamstrings, &[], Machine),
        builtin("hip-thrust", "Hip Thrust", Glutes, &[Hamstrings], Barbell),
        builtin("walking-lunge", "Walking Lunge", Glutes, &[Quadriceps, Hamstrings], Dumbbell),
        builtin("standing-calf-raise", "Standing Calf Raise", Calves, &[], Machine),
        builtin("crunch", "Crunch", Abs, &[], Bodyweight),
        builtin("hanging-leg-raise", "Hanging Leg Raise", Abs, &[Obliques], Bodyweight),
        builtin("russian-twist", "Russian Twist", Obliques, &[Abs], Bodyweight),
    ]
}
