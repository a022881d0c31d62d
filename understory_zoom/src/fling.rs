// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};
use tracing::debug;
use understory_motion::{FlingBounds, FlingPhysics, FlingTrajectory};

/// One sampled fling frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingFrame {
    /// Window origin for this frame.
    pub position: Point,
    /// `true` on the last frame; the driver is idle afterwards.
    pub finished: bool,
}

/// Polls a fling trajectory once per frame.
///
/// The trajectory's clock starts at the first [`FlingDriver::sample`] after
/// [`FlingDriver::start`], so arming a fling does not need a timestamp.
pub struct FlingDriver<P: FlingPhysics> {
    physics: P,
    active: Option<ActiveFling<P::Trajectory>>,
}

struct ActiveFling<T> {
    trajectory: T,
    start_ms: Option<u64>,
}

impl<P: FlingPhysics> FlingDriver<P> {
    /// Creates an idle driver using `physics` for new flings.
    #[must_use]
    pub fn new(physics: P) -> Self {
        Self {
            physics,
            active: None,
        }
    }

    /// Returns the physics model.
    #[must_use]
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Returns `true` while a fling is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a new fling, replacing any fling in flight.
    pub fn start(&mut self, origin: Point, velocity: Vec2, bounds: FlingBounds) {
        let trajectory = self.physics.fling(origin, velocity, bounds);
        debug!(
            vx = velocity.x,
            vy = velocity.y,
            duration_ms = trajectory.duration_ms(),
            "fling started"
        );
        self.active = Some(ActiveFling {
            trajectory,
            start_ms: None,
        });
    }

    /// Stops the fling in flight. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            debug!("fling cancelled");
        }
        was_active
    }

    /// Samples the fling at `now_ms`.
    ///
    /// Returns `None` when idle. The frame that reaches the end of the
    /// trajectory is returned with `finished == true`.
    pub fn sample(&mut self, now_ms: u64) -> Option<FlingFrame> {
        let active = self.active.as_mut()?;
        let start = *active.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let frame = FlingFrame {
            position: active.trajectory.position_at(elapsed),
            finished: active.trajectory.is_finished_at(elapsed),
        };
        if frame.finished {
            self.active = None;
            debug!(x = frame.position.x, y = frame.position.y, "fling finished");
        }
        Some(frame)
    }
}

impl<P: FlingPhysics + fmt::Debug> fmt::Debug for FlingDriver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlingDriver")
            .field("physics", &self.physics)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use understory_motion::{FlingBounds, SplineFlingPhysics};

    use super::FlingDriver;

    #[test]
    fn idle_driver_samples_nothing() {
        let mut driver = FlingDriver::new(SplineFlingPhysics::default());
        assert!(!driver.is_active());
        assert_eq!(driver.sample(0), None);
    }

    #[test]
    fn clock_starts_on_first_sample() {
        let mut driver = FlingDriver::new(SplineFlingPhysics::default());
        let origin = Point::new(50.0, 50.0);
        driver.start(origin, Vec2::new(2000.0, 0.0), FlingBounds::UNBOUNDED);

        let first = driver.sample(10_000).unwrap();
        assert_eq!(first.position, origin);
        assert!(!first.finished);

        let later = driver.sample(10_100).unwrap();
        assert!(later.position.x > origin.x);
    }

    #[test]
    fn runs_to_completion_then_goes_idle() {
        let mut driver = FlingDriver::new(SplineFlingPhysics::default());
        driver.start(Point::ZERO, Vec2::new(0.0, -1500.0), FlingBounds::UNBOUNDED);

        let mut now = 0;
        let mut last = None;
        while let Some(frame) = driver.sample(now) {
            last = Some(frame);
            now += 16;
            assert!(now < 60_000, "fling never finished");
        }
        let last = last.unwrap();
        assert!(last.finished);
        assert!(last.position.y < 0.0);
        assert!(!driver.is_active());
    }

    #[test]
    fn cancel_stops_fling() {
        let mut driver = FlingDriver::new(SplineFlingPhysics::default());
        driver.start(Point::ZERO, Vec2::new(500.0, 500.0), FlingBounds::UNBOUNDED);
        assert!(driver.cancel());
        assert!(!driver.cancel());
        assert_eq!(driver.sample(5), None);
    }
}
