// ABOUTME: Exercise catalog models including Exercise, MuscleGroup, and Equipment
// ABOUTME: Built-in exercises are immutable; custom exercises are user-owned and mutable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use serde::{Deserialize, Serialize};

/// Primary muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, and spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps brachii
    Biceps,
    /// Triceps brachii
    Triceps,
    /// Forearm flexors and extensors
    Forearms,
    /// Quadriceps femoris
    Quadriceps,
    /// Hamstrings
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
    /// Rectus abdominis
    Abs,
    /// Internal and external obliques
    Obliques,
}

impl MuscleGroup {
    /// Lowercase name matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Quadriceps => "quadriceps",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::Abs => "abs",
            Self::Obliques => "obliques",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment required to perform an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Olympic or standard barbell
    Barbell,
    /// Dumbbells
    Dumbbell,
    /// Cable stack
    Cable,
    /// Fixed-path machine
    Machine,
    /// No external load
    Bodyweight,
    /// Kettlebell
    Kettlebell,
    /// Resistance bands
    Bands,
    /// Anything else
    Other,
}

/// A movement in the exercise catalog
///
/// Built-in exercises ship with the application and are immutable. Custom
/// exercises are created by the user and can be edited or deleted, except
/// while a routine still references them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique identifier (slug for built-ins, UUID for custom exercises)
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group trained
    pub muscle_group: MuscleGroup,
    /// Secondary muscle groups, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_muscles: Option<Vec<MuscleGroup>>,
    /// Equipment the exercise requires
    pub equipment: Equipment,
    /// Free-form execution notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// True for user-created exercises
    pub is_custom: bool,
}

impl Exercise {
    /// Build a user-created exercise from a spec, assigning a fresh id
    #[must_use]
    pub fn custom(spec: NewExercise) -> Self {
        Self {
            id: super::generate_id(),
            name: spec.name,
            muscle_group: spec.muscle_group,
            secondary_muscles: spec.secondary_muscles,
            equipment: spec.equipment,
            instructions: spec.instructions,
            is_custom: true,
        }
    }

    /// Merge the fields present in `patch` into this exercise
    pub fn apply(&mut self, patch: ExercisePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(muscle_group) = patch.muscle_group {
            self.muscle_group = muscle_group;
        }
        if let Some(secondary_muscles) = patch.secondary_muscles {
            self.secondary_muscles = Some(secondary_muscles);
        }
        if let Some(equipment) = patch.equipment {
            self.equipment = equipment;
        }
        if let Some(instructions) = patch.instructions {
            self.instructions = Some(instructions);
        }
    }
}

/// Fields required to create a custom exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    /// Display name
    pub name: String,
    /// Primary muscle group trained
    pub muscle_group: MuscleGroup,
    /// Secondary muscle groups, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_muscles: Option<Vec<MuscleGroup>>,
    /// Equipment the exercise requires
    pub equipment: Equipment,
    /// Free-form execution notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Partial update for a custom exercise; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ExercisePatch {
    /// New display name
    pub name: Option<String>,
    /// New primary muscle group
    pub muscle_group: Option<MuscleGroup>,
    /// New secondary muscle list (replaces the whole list)
    pub secondary_muscles: Option<Vec<MuscleGroup>>,
    /// New equipment
    pub equipment: Option<Equipment>,
    /// New execution notes
    pub instructions: Option<String>,
}
