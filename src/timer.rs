// ABOUTME: Cancellable rest-interval timer: one logical slot, one pending task at most
// ABOUTME: Presentation-adjacent; firing or cancelling never touches persisted state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Project

//! The rest-interval countdown.
//!
//! Completing a set starts a rest interval; the timer models that as a
//! single cooperative scheduled task. Scheduling a new interval implicitly
//! cancels any pending one, and cancellation is guaranteed on every exit
//! path, including drop.

use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

struct ScheduledRest {
    handle: JoinHandle<()>,
    started_at: Instant,
    duration: Duration,
}

/// A single logical rest-timer slot
///
/// Must be used from within a tokio runtime; `schedule` spawns the
/// countdown task.
#[derive(Default)]
pub struct RestTimer {
    slot: Option<ScheduledRest>,
}

impl RestTimer {
    /// An idle timer with nothing scheduled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rest interval, cancelling any pending one
    ///
    /// `on_fire` runs once when the interval elapses. It runs on the
    /// runtime, so it must not block.
    pub fn schedule<F>(&mut self, duration: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        debug!(seconds = duration.as_secs(), "rest interval started");
        let handle = tokio::spawn(async move {
            sleep(duration).await;
            on_fire();
        });
        self.slot = Some(ScheduledRest {
            handle,
            started_at: Instant::now(),
            duration,
        });
    }

    /// Cancel the pending interval, if any
    pub fn cancel(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.handle.abort();
        }
    }

    /// User skipped the rest; identical to cancelling
    pub fn skip(&mut self) {
        self.cancel();
    }

    /// True while an interval is pending and has not fired
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.slot.as_ref().is_some_and(|s| !s.handle.is_finished())
    }

    /// Time left on the pending interval; zero when idle or already fired
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.slot
            .as_ref()
            .filter(|s| !s.handle.is_finished())
            .map_or(Duration::ZERO, |s| {
                s.duration.saturating_sub(s.started_at.elapsed())
            })
    }
}

impl Drop for RestTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
