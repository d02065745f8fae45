// ABOUTME: Lenient numeric input parsing for weight, rep, and RPE form fields
// ABOUTME: Unparseable input coerces to zero; the UI guards nonsensical zeros before display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

/// Parse a weight field; anything unparseable becomes `0.0`
#[must_use]
pub fn parse_weight(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Parse a rep-count field; anything unparseable becomes `0`
#[must_use]
pub fn parse_reps(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse an RPE field, clamped to the 0-10 scale; unparseable becomes `0.0`
#[must_use]
pub fn parse_rpe(raw: &str) -> f64 {
    raw.trim().parse().map_or(0.0, |rpe: f64| rpe.clamp(0.0, 10.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers_parse() {
        assert!((parse_weight("82.5") - 82.5).abs() < f64::EPSILON);
        assert_eq!(parse_reps(" 8 "), 8);
        assert!((parse_rpe("7.5") - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_coerces_to_zero() {
        assert!((parse_weight("heavy") - 0.0).abs() < f64::EPSILON);
        assert_eq!(parse_reps(""), 0);
        assert!((parse_rpe("n/a") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rpe_is_clamped_to_scale() {
        assert!((parse_rpe("14") - 10.0).abs() < f64::EPSILON);
        assert!((parse_rpe("-3") - 0.0).abs() < f64::EPSILON);
    }
}
