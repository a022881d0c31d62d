// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// A content‑space point pinned to a fixed fraction of the screen while the
/// scale changes.
///
/// Captured once when a scale gesture, double tap or zoom‑control press
/// begins, and read by every zoom step of that interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FocalPoint {
    /// Pinned location in content space.
    pub content: Point,
    /// Where `content` projects, as a fraction (`0..=1` per axis) of the screen.
    pub fraction: Point,
}

impl FocalPoint {
    /// Creates a focal point from its parts.
    #[must_use]
    pub fn new(content: Point, fraction: Point) -> Self {
        Self { content, fraction }
    }

    /// Captures the content point under `screen_pt`.
    ///
    /// `window` and `scale` describe the current mapping; `screen` is the
    /// full screen rect the window is mapped onto.
    #[must_use]
    pub fn capture(window: Rect, scale: f64, screen: Rect, screen_pt: Point) -> Self {
        Self {
            content: Point::new(
                window.x0 + screen_pt.x / scale,
                window.y0 + screen_pt.y / scale,
            ),
            fraction: Point::new(
                screen_pt.x / screen.width(),
                screen_pt.y / screen.height(),
            ),
        }
    }

    /// Pins the center of `window` to the center of the screen.
    #[must_use]
    pub fn window_center(window: Rect) -> Self {
        Self {
            content: window.center(),
            fraction: Point::new(0.5, 0.5),
        }
    }

    /// Places a window of `size` so that `content` sits at `fraction` of it.
    #[must_use]
    pub fn anchor_window(&self, size: Size) -> Rect {
        let origin = Point::new(
            self.content.x - size.width * self.fraction.x,
            self.content.y - size.height * self.fraction.y,
        );
        Rect::from_origin_size(origin, size)
    }
}
