// ABOUTME: Local user profile models with training goal and bodyweight history
// ABOUTME: A single user per install; no accounts, no multi-user state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Maximal strength
    Strength,
    /// Muscle growth
    Hypertrophy,
    /// Muscular endurance
    Endurance,
}

/// One bodyweight measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    /// When the measurement was taken (UTC)
    pub date: DateTime<Utc>,
    /// Bodyweight in kg
    pub weight: f64,
}

/// The local user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Current bodyweight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// Date of birth, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Primary training goal
    pub goal: Goal,
    /// Profile creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Bodyweight history, oldest first
    pub weight_history: Vec<WeightEntry>,
}

impl User {
    /// Merge the fields present in `patch` into this profile
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
    }
}

/// Partial update for the user profile; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// New display name
    pub name: Option<String>,
    /// New current bodyweight in kg
    pub weight: Option<f64>,
    /// New height in cm
    pub height: Option<f64>,
    /// New date of birth
    pub birth_date: Option<NaiveDate>,
    /// New training goal
    pub goal: Option<Goal>,
}
