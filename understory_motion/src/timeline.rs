// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time‑based progress for fixed‑duration animations.

use core::f64::consts::PI;

/// Maps normalized linear time onto normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interpolator {
    /// Progress equals elapsed time.
    #[default]
    Linear,
    /// Cosine ease: slow start, fast middle, slow end.
    AccelerateDecelerate,
}

impl Interpolator {
    /// Interpolates `t`, which is clamped to `[0, 1]` first.
    #[must_use]
    pub fn interpolate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => libm::cos((t + 1.0) * PI) / 2.0 + 0.5,
        }
    }
}

/// Half a sine period over `progress`, capped at `cap`.
///
/// Rises from `0` at `progress == 0`, peaks at the midpoint and returns to
/// `0` at `progress == 1`. Useful for fade in/out cues that share an
/// animation's progress without sharing its interpolation.
#[must_use]
pub fn sine_pulse(progress: f64, cap: f64) -> f64 {
    libm::sin(progress.clamp(0.0, 1.0) * PI).min(cap)
}

/// Start time and duration of a single animation run.
///
/// The timeline starts out unarmed; call [`AnimationTimeline::start_at`] with
/// the first frame time. All queries are pure functions of the supplied
/// clock value, so timelines can be tested without an event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTimeline {
    duration_ms: u64,
    start_ms: Option<u64>,
}

impl AnimationTimeline {
    /// Creates an unstarted timeline of the given duration.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            start_ms: None,
        }
    }

    /// Returns the configured duration.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns the start time, if the timeline has been started.
    #[must_use]
    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    /// Returns `true` once [`AnimationTimeline::start_at`] has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Starts (or restarts) the timeline at `now_ms`.
    pub fn start_at(&mut self, now_ms: u64) {
        self.start_ms = Some(now_ms);
    }

    /// Forgets the start time.
    pub fn reset(&mut self) {
        self.start_ms = None;
    }

    /// Milliseconds elapsed since the start, saturating at zero for clocks
    /// that read earlier than the start.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.start_ms.map_or(0, |start| now_ms.saturating_sub(start))
    }

    /// Normalized linear progress in `[0, 1]`.
    ///
    /// An unstarted timeline reports `0`; a zero‑length timeline reports `1`
    /// as soon as it is started.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.start_ms.is_none() {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms(now_ms) as f64 / self.duration_ms as f64).min(1.0)
    }

    /// Returns `true` when the timeline is started and its duration has elapsed.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.start_ms.is_some() && self.elapsed_ms(now_ms) >= self.duration_ms
    }
}
