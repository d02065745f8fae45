// ABOUTME: Weight progression suggestion types produced by the advisor
// ABOUTME: Ephemeral, computed on demand; never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

use serde::{Deserialize, Serialize};

/// Direction of a weight suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Add load next session
    Increase,
    /// Hold the current load
    Maintain,
    /// Reduce load
    Decrease,
    /// Scheduled recovery week at reduced load
    Deload,
}

/// A load recommendation for the next session of one exercise
///
/// Computed on demand from history; same history always yields the same
/// suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightSuggestion {
    /// Direction of the recommendation
    pub kind: SuggestionKind,
    /// Signed adjustment; kg for increases, percent for deloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Recommended working weight in kg
    pub suggested_weight: f64,
    /// Human-readable rationale for the recommendation
    pub reason: String,
}
