// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point};
use peniko::Color;
use peniko::color::palette::css::{BLACK, WHITE};
use tracing::debug;
use understory_motion::{AnimationTimeline, Interpolator, sine_pulse};

/// Lifecycle of a [`ZoomAnimation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Nothing to animate.
    #[default]
    Idle,
    /// A transition is in progress.
    Running,
}

/// One sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFrame {
    /// Scale to apply for this frame.
    pub scale: f64,
    /// `true` on the last frame; the animation is idle afterwards.
    pub finished: bool,
}

/// Timed transition between two scales, used for double‑tap zoom.
///
/// The scale follows the configured [`Interpolator`] (linear by default).
/// Independently, a decorative cue alpha follows a capped sine pulse over
/// the same progress, fading in and back out.
#[derive(Clone, Copy, Debug)]
pub struct ZoomAnimation {
    timeline: AnimationTimeline,
    interpolator: Interpolator,
    state: AnimationState,
    from: f64,
    to: f64,
    max_alpha: f64,
    alpha: f64,
}

impl ZoomAnimation {
    /// Creates an idle animation.
    ///
    /// `max_alpha` caps the cue's sine pulse; the reported alpha is normalized
    /// so that the cap maps to `1.0`.
    #[must_use]
    pub fn new(duration_ms: u64, interpolator: Interpolator, max_alpha: f64) -> Self {
        Self {
            timeline: AnimationTimeline::new(duration_ms),
            interpolator,
            state: AnimationState::Idle,
            from: 0.0,
            to: 0.0,
            max_alpha,
            alpha: 0.0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns `true` while running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Scale the current (or last) transition started from.
    #[must_use]
    pub fn from_scale(&self) -> f64 {
        self.from
    }

    /// Scale the current (or last) transition ends at.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.to
    }

    /// Normalized cue alpha in `[0, 1]` as of the last sample.
    #[must_use]
    pub fn cue_alpha(&self) -> f64 {
        self.alpha
    }

    /// Starts a transition from `from` to `to`.
    ///
    /// The clock starts at the next [`ZoomAnimation::sample`].
    pub fn start(&mut self, from: f64, to: f64) {
        self.from = from;
        self.to = to;
        self.alpha = 0.0;
        self.timeline.reset();
        self.state = AnimationState::Running;
        debug!(from, to, "zoom animation started");
    }

    /// Stops a running transition. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        if was_running {
            self.state = AnimationState::Idle;
            self.alpha = 0.0;
            debug!("zoom animation cancelled");
        }
        was_running
    }

    /// Samples the transition at `now_ms`.
    ///
    /// Returns `None` when idle.
    pub fn sample(&mut self, now_ms: u64) -> Option<ZoomFrame> {
        if !self.is_running() {
            return None;
        }
        if !self.timeline.is_started() {
            self.timeline.start_at(now_ms);
        }
        let progress = self.timeline.progress(now_ms);
        self.alpha = sine_pulse(progress, self.max_alpha) / self.max_alpha;
        let finished = self.timeline.is_finished(now_ms);
        let scale = if finished {
            self.to
        } else {
            self.from + (self.to - self.from) * self.interpolator.interpolate(progress)
        };
        let frame = ZoomFrame { scale, finished };
        if frame.finished {
            self.state = AnimationState::Idle;
            debug!(scale = frame.scale, "zoom animation finished");
        }
        Some(frame)
    }
}

/// One stroked ring of a [`FocusCue`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueRing {
    /// Ring geometry in screen space.
    pub circle: Circle,
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    /// Stroke color, alpha already applied.
    pub color: Color,
}

/// Decorative marker drawn at the focal point while a zoom animation runs.
///
/// Purely visual: two concentric rings, a wide white one under a narrow
/// black one, fading with the animation's cue alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusCue {
    /// Focal point projected into screen space.
    pub center: Point,
    /// Normalized alpha in `[0, 1]`.
    pub alpha: f64,
    /// Outer ring first, then the inner ring.
    pub rings: [CueRing; 2],
}

impl FocusCue {
    /// Outer ring stroke width, in content units.
    pub const OUTER_STROKE: f64 = 10.0;
    /// Inner ring stroke width, in content units.
    pub const INNER_STROKE: f64 = 4.0;

    /// Builds the cue at `center` (screen space).
    ///
    /// `radius` and the stroke widths are content units and are scaled by
    /// `scale`, the way the cue would render under the content transform.
    #[must_use]
    pub fn new(center: Point, scale: f64, radius: f64, alpha: f64) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "color channels are f32; alpha is in [0, 1]"
        )]
        let a = alpha.clamp(0.0, 1.0) as f32;
        let circle = Circle::new(center, radius * scale);
        Self {
            center,
            alpha,
            rings: [
                CueRing {
                    circle,
                    stroke_width: Self::OUTER_STROKE * scale,
                    color: WHITE.with_alpha(a),
                },
                CueRing {
                    circle,
                    stroke_width: Self::INNER_STROKE * scale,
                    color: BLACK.with_alpha(a),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_motion::Interpolator;

    use super::{AnimationState, FocusCue, ZoomAnimation};

    #[test]
    fn idle_animation_samples_nothing() {
        let mut anim = ZoomAnimation::new(1000, Interpolator::Linear, 0.75);
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.sample(0), None);
    }

    #[test]
    fn scale_moves_linearly_between_endpoints() {
        let mut anim = ZoomAnimation::new(1000, Interpolator::Linear, 0.75);
        anim.start(0.25, 1.0);
        assert!(anim.is_running());

        let first = anim.sample(2_000).unwrap();
        assert_eq!(first.scale, 0.25);
        assert!(!first.finished);

        let mid = anim.sample(2_500).unwrap();
        assert!((mid.scale - 0.625).abs() < 1e-12);

        let last = anim.sample(3_000).unwrap();
        assert_eq!(last.scale, 1.0);
        assert!(last.finished);
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.sample(3_016), None);
    }

    #[test]
    fn cue_alpha_pulses_and_saturates() {
        let mut anim = ZoomAnimation::new(1000, Interpolator::Linear, 0.75);
        anim.start(1.0, 0.5);
        anim.sample(0);
        assert!(anim.cue_alpha().abs() < 1e-12);
        anim.sample(500);
        // sin(pi/2) = 1 is capped at 0.75, which normalizes to 1.
        assert_eq!(anim.cue_alpha(), 1.0);
        anim.sample(100);
        let early = anim.cue_alpha();
        assert!(early > 0.0 && early < 1.0);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut anim = ZoomAnimation::new(1000, Interpolator::Linear, 0.75);
        anim.start(0.5, 1.0);
        anim.sample(0);
        assert!(anim.cancel());
        assert!(!anim.cancel());
        assert_eq!(anim.sample(10), None);
        assert_eq!(anim.cue_alpha(), 0.0);
    }

    #[test]
    fn focus_cue_scales_rings() {
        let cue = FocusCue::new(Point::new(10.0, 20.0), 0.5, 16.0, 1.0);
        assert_eq!(cue.rings[0].circle.radius, 8.0);
        assert_eq!(cue.rings[0].stroke_width, 5.0);
        assert_eq!(cue.rings[1].stroke_width, 2.0);
        assert_eq!(cue.rings[1].circle.center, Point::new(10.0, 20.0));
    }
}
