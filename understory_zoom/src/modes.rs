// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

/// One of the two screen axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    Horizontal,
    /// The Y axis.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Extent of `rect` along this axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Leading and trailing edge of `rect` along this axis.
    #[must_use]
    pub fn edges(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// Component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// How the window is positioned along one axis.
///
/// The policy is chosen independently for each axis from the size of the
/// content as it is currently rendered, so a wide panorama can scroll
/// horizontally while staying centered vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisFit {
    /// Rendered content is larger than the screen: the window may pan, but
    /// its edges never cross the content's edges.
    Overflow,
    /// Rendered content fits on screen: the window is centered on the
    /// content and pan or fling input on this axis has no effect.
    Fitted,
}

impl AxisFit {
    /// Relative slack under which rendered content still counts as fitting.
    ///
    /// The mapped extent goes through the transform, so content that fits
    /// the screen exactly can come out a few ulps larger.
    pub const FIT_TOLERANCE: f64 = 1e-9;

    /// Classifies an axis from the rendered content extent and the screen extent.
    #[must_use]
    pub fn classify(mapped_extent: f64, screen_extent: f64) -> Self {
        if mapped_extent > screen_extent * (1.0 + Self::FIT_TOLERANCE) {
            Self::Overflow
        } else {
            Self::Fitted
        }
    }

    /// Returns `true` for [`AxisFit::Overflow`].
    #[must_use]
    pub fn overflows(self) -> bool {
        self == Self::Overflow
    }

    /// Resolves the window's leading edge along one axis.
    ///
    /// `window` and `content` are `(leading, trailing)` edge pairs. When the
    /// window crosses both content edges, the leading edge wins.
    #[must_use]
    pub fn resolve(self, window: (f64, f64), content: (f64, f64)) -> f64 {
        let (w0, w1) = window;
        let (c0, c1) = content;
        match self {
            Self::Overflow => {
                let lead = c0 - w0;
                if lead > 0.0 {
                    return w0 + lead;
                }
                let trail = c1 - w1;
                if trail < 0.0 {
                    return w0 + trail;
                }
                w0
            }
            Self::Fitted => c0 + ((c1 - c0) - (w1 - w0)) / 2.0,
        }
    }
}
