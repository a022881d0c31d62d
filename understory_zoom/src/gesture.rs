// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Classified gesture signals consumed by [`crate::ZoomController::handle`].
///
/// Raw pointer streams are turned into these by the host's gesture
/// recognizer. All positions and distances are in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down. Hides the zoom controls and stops any running motion.
    Down,
    /// A pinch started with its focus at `focus`.
    ScaleBegin {
        /// Pinch focus in screen coordinates.
        focus: Point,
    },
    /// The pinch span changed by `factor` since the previous update.
    ScaleUpdate {
        /// Incremental scale factor.
        factor: f64,
    },
    /// The pinch ended.
    ScaleEnd,
    /// The pointer was dragged.
    Drag {
        /// Previous pointer position minus current pointer position. Positive
        /// components move the window towards larger content coordinates.
        distance: Vec2,
    },
    /// The pointer was released while moving.
    Fling {
        /// Release velocity in screen pixels per second.
        velocity: Vec2,
    },
    /// Two quick taps at `position`.
    DoubleTap {
        /// Tap location in screen coordinates.
        position: Point,
    },
    /// The pointer was held down without moving.
    LongPress,
    /// A button of the zoom affordance was pressed.
    ZoomButton(ZoomDirection),
}

/// Direction of a zoom‑control press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Magnify.
    In,
    /// Shrink.
    Out,
}

/// Whether an event had an effect.
///
/// `NotHandled` is not a failure: it tells the host to route the event to
/// the next handler in its chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventResult {
    /// The event was consumed.
    Handled,
    /// The event had no effect here.
    NotHandled,
}

impl EventResult {
    /// Returns `true` for [`EventResult::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::NotHandled
        }
    }
}
