// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors reported by [`crate::ZoomController`] and [`crate::ViewportModel`].
///
/// Gestures that have no effect are not errors; they are reported as
/// [`crate::EventResult::NotHandled`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ZoomViewError {
    /// Content has a non‑positive dimension, so no minimum scale exists.
    #[error("invalid content size {width}x{height}: both dimensions must be positive")]
    InvalidContentSize {
        /// Offending content width.
        width: f64,
        /// Offending content height.
        height: f64,
    },
    /// Screen has a non‑positive dimension.
    #[error("invalid screen size {width}x{height}: both dimensions must be positive")]
    InvalidScreenSize {
        /// Offending screen width.
        width: f64,
        /// Offending screen height.
        height: f64,
    },
    /// A scale that cannot be applied: NaN, or non‑finite or non‑positive
    /// without clamping.
    #[error("invalid scale {scale}")]
    InvalidScale {
        /// Offending scale.
        scale: f64,
    },
    /// The operation needs a successful layout first.
    #[error("viewport has not been laid out")]
    InvalidState,
    /// The configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
