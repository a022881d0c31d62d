// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_motion::{Interpolator, SplineFlingPhysics};

use crate::error::ZoomViewError;

/// Tunables for a [`crate::ZoomController`].
///
/// All fields are public; start from [`ZoomViewConfig::default`] and override
/// what you need. The controller checks the values with
/// [`ZoomViewConfig::validate`] when it is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomViewConfig {
    /// Largest allowed scale. `1.0` means no magnification beyond the
    /// content's native resolution.
    pub max_scale: f64,
    /// Distance from a scale limit under which the matching zoom control is
    /// disabled.
    pub zoom_epsilon: f64,
    /// Duration of the animated double‑tap zoom.
    pub animation_duration_ms: u64,
    /// How the double‑tap animation maps time onto scale.
    pub animation_interpolator: Interpolator,
    /// Number of zoom‑control presses needed to cross the full scale range.
    pub zoom_button_steps: u32,
    /// Friction of the default fling model.
    pub fling_friction: f64,
    /// Display density used by the default fling model (`1.0` = 160 ppi).
    pub density: f64,
    /// Radius of the focus cue rings, in content units.
    pub cue_radius: f64,
    /// Cap applied to the focus cue's sine pulse before normalization.
    pub cue_max_alpha: f64,
}

impl ZoomViewConfig {
    /// Platform "long animation" time; the double‑tap zoom runs for twice this.
    pub const LONG_ANIMATION_MS: u64 = 500;

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_scale: 1.0,
            zoom_epsilon: 0.001,
            animation_duration_ms: 2 * Self::LONG_ANIMATION_MS,
            animation_interpolator: Interpolator::Linear,
            zoom_button_steps: 10,
            fling_friction: SplineFlingPhysics::DEFAULT_FRICTION,
            density: 1.0,
            cue_radius: 16.0,
            cue_max_alpha: 0.75,
        }
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ZoomViewError> {
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            return Err(ZoomViewError::InvalidConfig(
                "max_scale must be finite and positive",
            ));
        }
        if !(self.zoom_epsilon.is_finite() && self.zoom_epsilon >= 0.0) {
            return Err(ZoomViewError::InvalidConfig(
                "zoom_epsilon must be finite and non-negative",
            ));
        }
        if self.zoom_button_steps == 0 {
            return Err(ZoomViewError::InvalidConfig(
                "zoom_button_steps must be at least 1",
            ));
        }
        if !(self.fling_friction.is_finite() && self.fling_friction > 0.0) {
            return Err(ZoomViewError::InvalidConfig(
                "fling_friction must be finite and positive",
            ));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ZoomViewError::InvalidConfig(
                "density must be finite and positive",
            ));
        }
        if !(self.cue_max_alpha > 0.0 && self.cue_max_alpha <= 1.0) {
            return Err(ZoomViewError::InvalidConfig(
                "cue_max_alpha must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Builds the default fling model from `fling_friction` and `density`.
    #[must_use]
    pub fn fling_physics(&self) -> SplineFlingPhysics {
        SplineFlingPhysics::new(self.density).with_friction(self.fling_friction)
    }
}

impl Default for ZoomViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
