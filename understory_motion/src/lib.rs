// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: headless, time‑driven motion primitives.
//!
//! This crate provides small models for motion that a host advances frame by
//! frame. Nothing here owns a clock or a timer: every query takes the current
//! time (or the elapsed time) as an argument, so the same values can be driven
//! by a real event loop, a test, or a benchmark.
//!
//! - [`FlingPhysics`] / [`FlingTrajectory`]: turn a release velocity into a
//!   bounded deceleration path. [`SplineFlingPhysics`] is the stock model.
//! - [`AnimationTimeline`]: normalized progress of a fixed‑duration run.
//! - [`Interpolator`] and [`sine_pulse`]: shaping functions applied to that
//!   progress.
//!
//! ## Minimal fling example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_motion::{FlingBounds, FlingPhysics, FlingTrajectory, SplineFlingPhysics};
//!
//! let physics = SplineFlingPhysics::default();
//! let bounds = FlingBounds::new(Point::new(0.0, 0.0), Point::new(2_000.0, 0.0));
//! let fling = physics.fling(Point::new(100.0, 0.0), Vec2::new(2_500.0, 0.0), bounds);
//!
//! // Sample once per frame until the fling reports it has finished.
//! let mut t = 0;
//! while !fling.is_finished_at(t) {
//!     let _pos = fling.position_at(t);
//!     t += 16;
//! }
//! assert!(fling.end().x > 100.0);
//! ```
//!
//! ## Minimal timeline example
//!
//! ```rust
//! use understory_motion::{AnimationTimeline, Interpolator};
//!
//! let mut timeline = AnimationTimeline::new(1_000);
//! timeline.start_at(5_000);
//! let p = timeline.progress(5_250);
//! assert_eq!(Interpolator::Linear.interpolate(p), 0.25);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fling;
mod timeline;

pub use fling::{FlingBounds, FlingPhysics, FlingTrajectory, SplineFlingPhysics, SplineTrajectory};
pub use timeline::{AnimationTimeline, Interpolator, sine_pulse};
