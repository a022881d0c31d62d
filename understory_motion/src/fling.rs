// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling trajectories: a release velocity turned into a bounded, decelerating
//! path that can be sampled at any elapsed time.
//!
//! The split between [`FlingPhysics`] and [`FlingTrajectory`] keeps the physics
//! model injectable: a physics value is a small, reusable configuration, and
//! each call to [`FlingPhysics::fling`] produces an immutable trajectory whose
//! position is a pure function of elapsed milliseconds.

use kurbo::{Point, Vec2};

/// Per‑axis limits for the resting position of a fling.
///
/// An axis that should not be limited uses infinite bounds; see
/// [`FlingBounds::UNBOUNDED`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingBounds {
    /// Smallest allowed position on each axis.
    pub min: Point,
    /// Largest allowed position on each axis.
    pub max: Point,
}

impl FlingBounds {
    /// Bounds that never limit either axis.
    pub const UNBOUNDED: Self = Self {
        min: Point {
            x: f64::NEG_INFINITY,
            y: f64::NEG_INFINITY,
        },
        max: Point {
            x: f64::INFINITY,
            y: f64::INFINITY,
        },
    };

    /// Creates bounds from the minimum and maximum corner.
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Clamps `pt` into the bounds, axis by axis.
    ///
    /// The upper bound is applied first, so inverted bounds resolve to `min`.
    #[must_use]
    pub fn clamp(&self, pt: Point) -> Point {
        Point::new(
            pt.x.min(self.max.x).max(self.min.x),
            pt.y.min(self.max.y).max(self.min.y),
        )
    }
}

impl Default for FlingBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// A fully determined fling path.
pub trait FlingTrajectory {
    /// Position at `elapsed_ms == 0`.
    fn start(&self) -> Point;

    /// Resting position once the fling has finished.
    fn end(&self) -> Point;

    /// Total duration of the fling in milliseconds.
    fn duration_ms(&self) -> u64;

    /// Position after `elapsed_ms` milliseconds.
    ///
    /// Values past [`FlingTrajectory::duration_ms`] return [`FlingTrajectory::end`].
    fn position_at(&self, elapsed_ms: u64) -> Point;

    /// Returns `true` once `elapsed_ms` has reached the end of the fling.
    fn is_finished_at(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms()
    }
}

/// A strategy that turns a release velocity into a [`FlingTrajectory`].
pub trait FlingPhysics {
    /// Trajectory type produced by this model.
    type Trajectory: FlingTrajectory;

    /// Builds a trajectory starting at `start`, moving with `velocity`
    /// (units per second) and coming to rest inside `bounds`.
    fn fling(&self, start: Point, velocity: Vec2, bounds: FlingBounds) -> Self::Trajectory;
}

/// Standard gravity in m/s².
const GRAVITY_EARTH: f64 = 9.80665;
/// Inches per meter.
const INCHES_PER_METER: f64 = 39.37;
/// Tuned fudge factor applied to the physical coefficient.
const PHYSICAL_TUNING: f64 = 0.84;
/// Baseline pixels per inch at density `1.0`.
const BASELINE_PPI: f64 = 160.0;

const INFLEXION: f64 = 0.35;
const START_TENSION: f64 = 0.5;
const END_TENSION: f64 = 1.0;
const P1: f64 = START_TENSION * INFLEXION;
const P2: f64 = 1.0 - END_TENSION * (1.0 - INFLEXION);

const NB_SAMPLES: usize = 100;

/// Normalized distance covered at each of `NB_SAMPLES` evenly spaced times.
const SPLINE_POSITION: [f64; NB_SAMPLES + 1] = build_spline_table();

const fn build_spline_table() -> [f64; NB_SAMPLES + 1] {
    let mut table = [0.0; NB_SAMPLES + 1];
    let mut x_min = 0.0;
    let mut i = 0;
    while i < NB_SAMPLES {
        let alpha = i as f64 / NB_SAMPLES as f64;
        let mut x_max = 1.0;
        // Bisect for the curve parameter whose time coordinate is `alpha`.
        let (x, coef) = loop {
            let x = x_min + (x_max - x_min) / 2.0;
            let coef = 3.0 * x * (1.0 - x);
            let tx = coef * ((1.0 - x) * P1 + x * P2) + x * x * x;
            if (tx - alpha).abs() < 1e-5 {
                break (x, coef);
            }
            if tx > alpha {
                x_max = x;
            } else {
                x_min = x;
            }
        };
        table[i] = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
        i += 1;
    }
    table[NB_SAMPLES] = 1.0;
    table
}

fn deceleration_rate() -> f64 {
    libm::log(0.78) / libm::log(0.9)
}

/// Spline deceleration model of a touch scroller.
///
/// Distance and duration grow with the release speed following a fixed
/// friction curve; progress along the path follows a precomputed spline
/// that starts fast and eases into the resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineFlingPhysics {
    friction: f64,
    physical_coeff: f64,
}

impl SplineFlingPhysics {
    /// Default scroll friction.
    pub const DEFAULT_FRICTION: f64 = 0.015;

    /// Creates a model for a display with the given density (`1.0` = 160 ppi).
    #[must_use]
    pub fn new(density: f64) -> Self {
        let ppi = density * BASELINE_PPI;
        Self {
            friction: Self::DEFAULT_FRICTION,
            physical_coeff: GRAVITY_EARTH * INCHES_PER_METER * ppi * PHYSICAL_TUNING,
        }
    }

    /// Returns a copy of this model with a different friction.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Returns the configured friction.
    #[must_use]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    fn spline_deceleration(&self, speed: f64) -> f64 {
        libm::log(INFLEXION * speed / (self.friction * self.physical_coeff))
    }

    /// Duration in milliseconds of a fling released at `speed` units per second.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "durations are whole milliseconds, sub-millisecond remainders are dropped"
    )]
    pub fn fling_duration_ms(&self, speed: f64) -> u64 {
        let speed = speed.abs();
        if speed == 0.0 {
            return 0;
        }
        let l = self.spline_deceleration(speed);
        (1000.0 * libm::exp(l / (deceleration_rate() - 1.0))) as u64
    }

    /// Distance travelled by a fling released at `speed` units per second.
    #[must_use]
    pub fn fling_distance(&self, speed: f64) -> f64 {
        let speed = speed.abs();
        if speed == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(speed);
        let rate = deceleration_rate();
        self.friction * self.physical_coeff * libm::exp(rate / (rate - 1.0) * l)
    }
}

impl Default for SplineFlingPhysics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FlingPhysics for SplineFlingPhysics {
    type Trajectory = SplineTrajectory;

    fn fling(&self, start: Point, velocity: Vec2, bounds: FlingBounds) -> SplineTrajectory {
        let speed = libm::hypot(velocity.x, velocity.y);
        let direction = if speed == 0.0 {
            Vec2::new(1.0, 1.0)
        } else {
            velocity / speed
        };
        let distance = self.fling_distance(speed);
        let end = bounds.clamp(start + direction * distance);
        SplineTrajectory {
            start,
            end,
            duration_ms: self.fling_duration_ms(speed),
        }
    }
}

/// Trajectory produced by [`SplineFlingPhysics`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineTrajectory {
    start: Point,
    end: Point,
    duration_ms: u64,
}

impl SplineTrajectory {
    /// Fraction of the total distance covered at normalized time `t`.
    fn distance_coef(t: f64) -> f64 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "`t` is in [0, 1), so the sample index fits in usize"
        )]
        let index = (NB_SAMPLES as f64 * t) as usize;
        if index >= NB_SAMPLES {
            return 1.0;
        }
        let t_inf = index as f64 / NB_SAMPLES as f64;
        let t_sup = (index + 1) as f64 / NB_SAMPLES as f64;
        let d_inf = SPLINE_POSITION[index];
        let d_sup = SPLINE_POSITION[index + 1];
        d_inf + (t - t_inf) * (d_sup - d_inf) / (t_sup - t_inf)
    }
}

impl FlingTrajectory for SplineTrajectory {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn position_at(&self, elapsed_ms: u64) -> Point {
        if elapsed_ms >= self.duration_ms {
            return self.end;
        }
        if elapsed_ms == 0 {
            return self.start;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        self.start.lerp(self.end, Self::distance_coef(t))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{
        FlingBounds, FlingPhysics, FlingTrajectory, SPLINE_POSITION, SplineFlingPhysics,
        SplineTrajectory,
    };

    #[test]
    fn spline_table_is_monotonic_and_normalized() {
        assert!(SPLINE_POSITION[0] < 1e-4);
        assert_eq!(SPLINE_POSITION[SPLINE_POSITION.len() - 1], 1.0);
        for pair in SPLINE_POSITION.windows(2) {
            assert!(pair[1] >= pair[0], "spline must not move backwards");
        }
    }

    #[test]
    fn distance_coef_hits_endpoints() {
        assert!(SplineTrajectory::distance_coef(0.0) < 1e-4);
        assert_eq!(SplineTrajectory::distance_coef(1.0), 1.0);
        // Starts fast: half of the time covers well over half of the distance.
        assert!(SplineTrajectory::distance_coef(0.5) > 0.5);
    }

    #[test]
    fn zero_velocity_fling_is_immediately_finished() {
        let physics = SplineFlingPhysics::default();
        let start = Point::new(10.0, 20.0);
        let fling = physics.fling(start, Vec2::ZERO, FlingBounds::UNBOUNDED);
        assert_eq!(fling.duration_ms(), 0);
        assert_eq!(fling.end(), start);
        assert!(fling.is_finished_at(0));
        assert_eq!(fling.position_at(0), start);
    }

    #[test]
    fn faster_flings_travel_further_and_longer() {
        let physics = SplineFlingPhysics::default();
        let slow_d = physics.fling_distance(500.0);
        let fast_d = physics.fling_distance(4000.0);
        assert!(fast_d > slow_d);
        assert!(physics.fling_duration_ms(4000.0) > physics.fling_duration_ms(500.0));
        // Sign of the velocity does not matter for the magnitude.
        assert_eq!(physics.fling_distance(-500.0), slow_d);
    }

    #[test]
    fn higher_friction_shortens_distance() {
        let base = SplineFlingPhysics::default();
        let sticky = base.with_friction(0.05);
        assert!(sticky.fling_distance(2000.0) < base.fling_distance(2000.0));
    }

    #[test]
    fn fling_moves_along_velocity_direction() {
        let physics = SplineFlingPhysics::default();
        let fling = physics.fling(
            Point::ZERO,
            Vec2::new(3000.0, 0.0),
            FlingBounds::UNBOUNDED,
        );
        let end = fling.end();
        assert!(end.x > 0.0);
        assert!(end.y.abs() < 1e-9);

        let mid = fling.position_at(fling.duration_ms() / 2);
        assert!(mid.x > 0.0 && mid.x < end.x);
    }

    #[test]
    fn fling_end_is_clamped_into_bounds() {
        let physics = SplineFlingPhysics::default();
        let bounds = FlingBounds::new(
            Point::new(0.0, f64::NEG_INFINITY),
            Point::new(50.0, f64::INFINITY),
        );
        let fling = physics.fling(Point::new(10.0, 0.0), Vec2::new(8000.0, 0.0), bounds);
        assert_eq!(fling.end().x, 50.0);
        for ms in (0..=fling.duration_ms()).step_by(16) {
            let p = fling.position_at(ms);
            assert!(p.x >= 10.0 - 1e-9 && p.x <= 50.0 + 1e-9);
        }
    }

    #[test]
    fn bounds_clamp_prefers_min_when_inverted() {
        let bounds = FlingBounds::new(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(bounds.clamp(Point::new(5.0, 5.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn positions_past_duration_rest_at_end() {
        let physics = SplineFlingPhysics::default();
        let fling = physics.fling(
            Point::new(100.0, 100.0),
            Vec2::new(-1200.0, 900.0),
            FlingBounds::UNBOUNDED,
        );
        let end = fling.end();
        assert_eq!(fling.position_at(fling.duration_ms()), end);
        assert_eq!(fling.position_at(fling.duration_ms() + 10_000), end);
        assert!(end.x < 100.0);
        assert!(end.y > 100.0);
    }
}
