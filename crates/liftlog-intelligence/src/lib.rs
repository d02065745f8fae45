// ABOUTME: Training intelligence algorithms for the Liftlog tracker
// ABOUTME: Pure functions over workout history; no state, no clock, no storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! The progression advisor: pure, stateless computations over archived
//! workout history. Every function here is referentially transparent -
//! date-relative calculations take the reference instant as an explicit
//! argument, so identical inputs always produce identical outputs.
//!
//! ## Modules
//!
//! - **metrics**: 1RM estimation, session volume, duration estimation
//! - **recommendation**: the weight-progression decision engine
//! - **streaks**: consecutive-training-day streak calculation

/// Strength metrics: estimated 1RM, volume, and planning estimates
pub mod metrics;

/// Weight progression recommendation engine
pub mod recommendation;

/// Training streak calculation
pub mod streaks;

pub use metrics::{estimate_one_rep_max, estimate_workout_duration, session_volume, weight_increment};
pub use recommendation::suggest_weight;
pub use streaks::training_streak;
