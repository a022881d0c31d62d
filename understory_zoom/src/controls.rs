// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// State of the on‑screen zoom affordance.
///
/// The controller only publishes state; showing the widget, wiring its
/// buttons back as [`crate::GestureEvent::ZoomButton`] and rendering
/// [`ZoomControls::label`] are up to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomControls {
    zoom_in_enabled: bool,
    zoom_out_enabled: bool,
    visible: bool,
    scale: f64,
}

impl ZoomControls {
    /// Initial state: zoom‑in enabled, zoom‑out disabled, hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom_in_enabled: true,
            zoom_out_enabled: false,
            visible: false,
            scale: 0.0,
        }
    }

    /// Returns `true` if zooming in is possible.
    #[must_use]
    pub fn zoom_in_enabled(&self) -> bool {
        self.zoom_in_enabled
    }

    /// Returns `true` if zooming out is possible.
    #[must_use]
    pub fn zoom_out_enabled(&self) -> bool {
        self.zoom_out_enabled
    }

    /// Returns `true` while the affordance should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the scale the label reports.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the label text for the current scale.
    #[must_use]
    pub fn label(&self) -> ZoomLabel {
        ZoomLabel { scale: self.scale }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Refreshes the enable flags and label for `scale`.
    ///
    /// A button is disabled when the scale is within `epsilon` of its limit,
    /// so rounding noise at the exact bound does not make it flicker.
    pub(crate) fn update(&mut self, scale: f64, min_scale: f64, max_scale: f64, epsilon: f64) {
        self.scale = scale;
        self.zoom_in_enabled = (scale - max_scale).abs() > epsilon;
        self.zoom_out_enabled = (scale - min_scale).abs() > epsilon;
    }
}

impl Default for ZoomControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Display text of the zoom affordance, for example `Zoom: 25%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLabel {
    scale: f64,
}

impl ZoomLabel {
    /// Returns the scale as a percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.scale * 100.0
    }
}

impl fmt::Display for ZoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zoom: {:.0}%", self.percent())
    }
}
