// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: a headless pan/zoom controller for a fixed screen.
//!
//! This crate shows a large content surface (an image, a map, a document
//! page) through a fixed‑size screen and lets touch gestures pan and zoom it.
//! It focuses on:
//! - Geometry: the content, screen, window and mapped‑content rectangles,
//!   and the content‑to‑screen transform derived from them
//!   ([`ViewportModel`]).
//! - A per‑axis clamp/center policy: content larger than the screen is kept
//!   covering it, content smaller than the screen is centered ([`AxisFit`]).
//! - Focal anchoring: pinches, double taps and zoom‑control steps keep a
//!   chosen content point fixed on screen ([`FocalPoint`]).
//! - Motion: momentum fling and an animated double‑tap zoom, advanced by the
//!   host's frame clock ([`ZoomController::tick`]).
//! - Affordances: zoom‑control enablement, the `Zoom: N%` label and a
//!   decorative focus cue ([`ZoomControls`], [`FocusCue`]).
//!
//! It does **not** recognize gestures, own a timer or paint. Callers are
//! expected to:
//! - Classify raw pointer input into [`GestureEvent`]s.
//! - Call [`ZoomController::tick`] once per frame while [`Tick::active`] is set.
//! - Paint the content with [`Frame::transform`] and, if present, the cue.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::{GestureEvent, ZoomController, ZoomViewConfig};
//!
//! let mut zoom = ZoomController::new(ZoomViewConfig::default()).unwrap();
//! let layout = zoom
//!     .layout(Size::new(4000.0, 3000.0), Size::new(1000.0, 500.0))
//!     .unwrap();
//! assert!(!layout.small);
//!
//! // Double tap near the middle: animate up to the maximum scale.
//! zoom.handle(GestureEvent::DoubleTap { position: Point::new(500.0, 250.0) })
//!     .unwrap();
//! let mut now = 0;
//! while zoom.tick(now).unwrap().active {
//!     now += 16;
//! }
//! assert_eq!(zoom.scale(), Some(1.0));
//!
//! // Drag the content to the left by 100 screen pixels.
//! zoom.handle(GestureEvent::Drag { distance: Vec2::new(100.0, 0.0) })
//!     .unwrap();
//! ```
//!
//! ## Small content
//!
//! Content that already fits at the maximum scale is shown centered at its
//! fit‑to‑screen scale and every gesture reports
//! [`EventResult::NotHandled`].
//!
//! ## Custom fling physics
//!
//! [`ZoomController`] is generic over [`understory_motion::FlingPhysics`].
//! The default, [`understory_motion::SplineFlingPhysics`], mimics a touch
//! scroller; supply another model with [`ZoomController::with_fling_physics`].
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod content;
mod controller;
mod controls;
mod error;
mod fling;
mod focal;
mod gesture;
mod modes;
mod viewport;

pub use animation::{AnimationState, CueRing, FocusCue, ZoomAnimation, ZoomFrame};
pub use config::ZoomViewConfig;
pub use content::{ContentSource, resolve_content_size};
pub use controller::{Frame, Layout, Tick, ZoomController, ZoomDebugInfo};
pub use controls::{ZoomControls, ZoomLabel};
pub use error::ZoomViewError;
pub use fling::{FlingDriver, FlingFrame};
pub use focal::FocalPoint;
pub use gesture::{EventResult, GestureEvent, ZoomDirection};
pub use modes::{Axis, AxisFit};
pub use viewport::ViewportModel;
