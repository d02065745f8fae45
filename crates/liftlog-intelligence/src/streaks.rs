// ABOUTME: Consecutive-training-day streak calculation over workout dates
// ABOUTME: Day granularity; a gap of up to two days keeps the streak alive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! Training streak calculation.

use chrono::{DateTime, NaiveDate, Utc};

/// Maximum whole-day gap between sessions that keeps a streak alive
const MAX_GAP_DAYS: i64 = 2;

/// Count the current training streak as of `today`
///
/// Time of day is stripped; only calendar days matter. The streak is zero
/// when the most recent workout is more than two days old. Otherwise it
/// starts at one and grows while each consecutive pair of sessions, walking
/// newest to oldest, is at most two days apart.
#[must_use]
pub fn training_streak(dates: &[DateTime<Utc>], today: NaiveDate) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = dates.iter().map(DateTime::date_naive).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    if (today - days[0]).num_days() > MAX_GAP_DAYS {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() <= MAX_GAP_DAYS {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
