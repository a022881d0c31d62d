// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace};
use understory_motion::{FlingBounds, FlingPhysics, SplineFlingPhysics};

use crate::animation::{AnimationState, FocusCue, ZoomAnimation};
use crate::config::ZoomViewConfig;
use crate::content::{ContentSource, resolve_content_size};
use crate::controls::ZoomControls;
use crate::error::ZoomViewError;
use crate::fling::FlingDriver;
use crate::focal::FocalPoint;
use crate::gesture::{EventResult, GestureEvent, ZoomDirection};
use crate::modes::Axis;
use crate::viewport::ViewportModel;

/// Result of a successful [`ZoomController::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Scale at which the whole content fits; also the starting scale.
    pub min_scale: f64,
    /// Initial window rect in content space.
    pub window: Rect,
    /// Initial content‑to‑screen transform.
    pub transform: Affine,
    /// `true` if the content fits at the maximum scale and gestures are disabled.
    pub small: bool,
}

/// Result of a [`ZoomController::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// The view changed since the last tick and should be repainted.
    pub redraw: bool,
    /// A fling or animation is still running; keep requesting frames.
    pub active: bool,
    /// Current content‑to‑screen transform.
    pub transform: Affine,
}

/// Everything a host needs to paint one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Content‑to‑screen transform to paint the content with.
    pub transform: Affine,
    /// Visible part of the content, in content space.
    pub window: Rect,
    /// Decorative focus cue, present while a zoom animation runs.
    pub cue: Option<FocusCue>,
}

/// Snapshot of a [`ZoomController`] for debugging and inspection.
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Content rect.
    pub content: Rect,
    /// Screen rect.
    pub screen: Rect,
    /// Window rect.
    pub window: Rect,
    /// Content rect in screen space.
    pub mapped_content: Rect,
    /// Current scale.
    pub scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Configured maximum scale.
    pub max_scale: f64,
    /// Whether gestures are disabled because the content is small.
    pub small: bool,
    /// Focal point of the current or last zoom interaction.
    pub focal: FocalPoint,
    /// Whether a fling is in flight.
    pub fling_active: bool,
    /// Zoom animation state.
    pub animation: AnimationState,
    /// Whether a pinch is in progress.
    pub scaling: bool,
}

/// Gesture‑driven pan/zoom controller over a [`ViewportModel`].
///
/// The controller consumes classified [`GestureEvent`]s and a frame clock,
/// and publishes a transform plus affordance state. It never paints and
/// never owns a timer: the host calls [`ZoomController::tick`] once per frame
/// while [`Tick::active`] is set.
///
/// Motion sources supersede each other: starting a pinch, drag, fling,
/// double tap or zoom‑control step cancels whatever fling or animation was
/// running.
///
/// The fling model is injectable through `P`; the default reproduces a
/// touch scroller's spline deceleration.
pub struct ZoomController<P: FlingPhysics = SplineFlingPhysics> {
    config: ZoomViewConfig,
    viewport: Option<ViewportModel>,
    focal: FocalPoint,
    controls: ZoomControls,
    fling: FlingDriver<P>,
    animation: ZoomAnimation,
    scaling: bool,
    redraw_requested: bool,
}

impl ZoomController<SplineFlingPhysics> {
    /// Creates a controller using the default fling model built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidConfig`] if `config` is rejected by
    /// [`ZoomViewConfig::validate`].
    pub fn new(config: ZoomViewConfig) -> Result<Self, ZoomViewError> {
        config.validate()?;
        let physics = config.fling_physics();
        Self::with_fling_physics(config, physics)
    }
}

impl<P: FlingPhysics> ZoomController<P> {
    /// Creates a controller with a custom fling model.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidConfig`] if `config` is rejected by
    /// [`ZoomViewConfig::validate`].
    pub fn with_fling_physics(config: ZoomViewConfig, physics: P) -> Result<Self, ZoomViewError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: None,
            focal: FocalPoint::default(),
            controls: ZoomControls::new(),
            fling: FlingDriver::new(physics),
            animation: ZoomAnimation::new(
                config.animation_duration_ms,
                config.animation_interpolator,
                config.cue_max_alpha,
            ),
            scaling: false,
            redraw_requested: false,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomViewConfig {
        &self.config
    }

    /// Lays out content of `content_size` on a screen of `screen_size`.
    ///
    /// Resets the scale to the fit‑to‑screen minimum, centers the window and
    /// cancels any running motion.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidContentSize`] or
    /// [`ZoomViewError::InvalidScreenSize`]; the previous layout is kept.
    pub fn layout(&mut self, content_size: Size, screen_size: Size) -> Result<Layout, ZoomViewError> {
        let model = ViewportModel::layout(content_size, screen_size, self.config.max_scale)?;
        self.cancel_motion();
        self.scaling = false;
        self.focal = FocalPoint::window_center(model.window_rect());
        let (min, max) = model.scale_limits();
        self.controls
            .update(model.scale(), min, max, self.config.zoom_epsilon);
        let layout = Layout {
            min_scale: model.min_scale(),
            window: model.window_rect(),
            transform: model.transform(),
            small: model.is_small(),
        };
        if layout.small {
            debug!("content fits at max scale, gestures disabled");
        }
        self.viewport = Some(model);
        self.redraw_requested = true;
        Ok(layout)
    }

    /// Lays out `source`, using its explicit bounds when they are non‑empty
    /// and its intrinsic size otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`ZoomController::layout`].
    pub fn layout_content(
        &mut self,
        source: &impl ContentSource,
        screen_size: Size,
    ) -> Result<Layout, ZoomViewError> {
        self.layout(resolve_content_size(source), screen_size)
    }

    /// Returns the viewport model once laid out.
    #[must_use]
    pub fn viewport(&self) -> Option<&ViewportModel> {
        self.viewport.as_ref()
    }

    /// Returns `true` after a successful layout.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.viewport.is_some()
    }

    /// Returns `true` if the content fits at the maximum scale.
    #[must_use]
    pub fn is_small(&self) -> bool {
        self.viewport.as_ref().is_some_and(ViewportModel::is_small)
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.viewport.as_ref().map(ViewportModel::scale)
    }

    /// Returns the current window rect.
    #[must_use]
    pub fn window_rect(&self) -> Option<Rect> {
        self.viewport.as_ref().map(ViewportModel::window_rect)
    }

    /// Returns the current content‑to‑screen transform.
    #[must_use]
    pub fn transform(&self) -> Option<Affine> {
        self.viewport.as_ref().map(ViewportModel::transform)
    }

    /// Returns the zoom affordance state.
    #[must_use]
    pub fn controls(&self) -> &ZoomControls {
        &self.controls
    }

    /// Returns the focal point of the current or last zoom interaction.
    #[must_use]
    pub fn focal_point(&self) -> FocalPoint {
        self.focal
    }

    /// Returns `true` while a fling or zoom animation needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fling.is_active() || self.animation.is_running()
    }

    /// Returns the decorative focus cue while a zoom animation runs.
    #[must_use]
    pub fn focus_cue(&self) -> Option<FocusCue> {
        if !self.animation.is_running() {
            return None;
        }
        let model = self.viewport.as_ref()?;
        Some(FocusCue::new(
            model.content_to_screen(self.focal.content),
            model.scale(),
            self.config.cue_radius,
            self.animation.cue_alpha(),
        ))
    }

    /// Returns what the host needs to paint the current state.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        let model = self.viewport.as_ref()?;
        Some(Frame {
            transform: model.transform(),
            window: model.window_rect(),
            cue: self.focus_cue(),
        })
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    /// Sets the scale, keeping the focal point fixed on screen.
    ///
    /// With `adjust`, `scale` is first clamped into the allowed range;
    /// without it, the caller vouches that `scale` is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout, and
    /// [`ZoomViewError::InvalidScale`] for NaN, or for a non‑finite or
    /// non‑positive `scale` without `adjust`. Nothing changes on error.
    pub fn set_zoom(&mut self, scale: f64, adjust: bool) -> Result<(), ZoomViewError> {
        if scale.is_nan() || (!adjust && !(scale.is_finite() && scale > 0.0)) {
            return Err(ZoomViewError::InvalidScale { scale });
        }
        let focal = self.focal;
        let model = self.model_mut()?;
        let scale = if adjust {
            model.clamp_scale(scale)
        } else {
            scale
        };
        model.zoom_to(scale, &focal);
        let (min, max) = model.scale_limits();
        self.controls
            .update(scale, min, max, self.config.zoom_epsilon);
        self.redraw_requested = true;
        Ok(())
    }

    /// Dispatches a gesture event.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn handle(&mut self, event: GestureEvent) -> Result<EventResult, ZoomViewError> {
        match event {
            GestureEvent::Down => self.on_down(),
            GestureEvent::ScaleBegin { focus } => self.on_scale_begin(focus),
            GestureEvent::ScaleUpdate { factor } => self.on_scale_update(factor),
            GestureEvent::ScaleEnd => self.on_scale_end(),
            GestureEvent::Drag { distance } => self.on_drag(distance),
            GestureEvent::Fling { velocity } => self.on_fling_start(velocity),
            GestureEvent::DoubleTap { position } => self.on_double_tap(position),
            GestureEvent::LongPress => self.on_long_press(),
            GestureEvent::ZoomButton(direction) => self.on_zoom_button(direction),
        }
    }

    /// A pointer went down: hide the zoom controls and stop any motion.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_down(&mut self) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        self.controls.set_visible(false);
        self.cancel_motion();
        Ok(EventResult::Handled)
    }

    /// A pinch began at `focus` (screen coordinates).
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_scale_begin(&mut self, focus: Point) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        self.cancel_motion();
        self.capture_focal(focus)?;
        self.scaling = true;
        Ok(EventResult::Handled)
    }

    /// The pinch span changed by `factor`.
    ///
    /// Updates that would leave the scale range are ignored, so a pinch
    /// resumes only once it comes back into range.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_scale_update(&mut self, factor: f64) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        let model = self.model()?;
        let candidate = model.scale() * factor;
        if !model.scale_in_range(candidate) {
            trace!(candidate, "scale update out of range");
            return Ok(EventResult::NotHandled);
        }
        self.set_zoom(candidate, false)?;
        Ok(EventResult::Handled)
    }

    /// The pinch ended.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_scale_end(&mut self) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        let was_scaling = core::mem::replace(&mut self.scaling, false);
        Ok(was_scaling.into())
    }

    /// The pointer was dragged by `distance` screen pixels.
    ///
    /// Axes on which the content fits are not pannable; if neither axis can
    /// move, the event is not handled.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_drag(&mut self, distance: Vec2) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        let model = self.model()?;
        let delta = pannable(model, distance) / model.scale();
        if delta.x == 0.0 && delta.y == 0.0 {
            return Ok(EventResult::NotHandled);
        }
        self.cancel_motion();
        self.model_mut()?.offset_window(delta);
        self.redraw_requested = true;
        Ok(EventResult::Handled)
    }

    /// The pointer was released with `velocity` screen pixels per second.
    ///
    /// The window moves against the velocity, so the content follows the
    /// finger. Axes on which the content fits get no velocity; if neither
    /// axis can move, the event is not handled.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_fling_start(&mut self, velocity: Vec2) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        let model = self.model()?;
        let v = -pannable(model, velocity);
        if v.x == 0.0 && v.y == 0.0 {
            return Ok(EventResult::NotHandled);
        }

        let window = model.window_rect();
        let content = model.content_rect();
        let mut bounds = FlingBounds::UNBOUNDED;
        if v.x != 0.0 {
            bounds.min.x = content.x0;
            bounds.max.x = content.x1 - window.width();
        }
        if v.y != 0.0 {
            bounds.min.y = content.y0;
            bounds.max.y = content.y1 - window.height();
        }

        self.animation.cancel();
        self.fling.start(window.origin(), v, bounds);
        self.redraw_requested = true;
        Ok(EventResult::Handled)
    }

    /// Two quick taps at `position`: animate to the other end of the scale
    /// range, keeping the tapped content point fixed on screen.
    ///
    /// Zooms in when the current scale is below the middle of the range,
    /// and out otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_double_tap(&mut self, position: Point) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        self.cancel_motion();
        self.capture_focal(position)?;
        let model = self.model()?;
        let scale = model.scale();
        let (min, max) = model.scale_limits();
        let target = if scale < (max + min) / 2.0 { max } else { min };
        self.animation.start(scale, target);
        self.redraw_requested = true;
        Ok(EventResult::Handled)
    }

    /// The pointer was held: show the zoom controls unless a pinch is active.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_long_press(&mut self) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? || self.scaling {
            return Ok(EventResult::NotHandled);
        }
        self.controls.set_visible(true);
        Ok(EventResult::Handled)
    }

    /// A zoom control was pressed: step the scale around the window center.
    ///
    /// Each step is `1 / zoom_button_steps` of the scale range.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidState`] before a successful layout.
    pub fn on_zoom_button(
        &mut self,
        direction: ZoomDirection,
    ) -> Result<EventResult, ZoomViewError> {
        if !self.interactive()? {
            return Ok(EventResult::NotHandled);
        }
        self.cancel_motion();
        let model = self.model()?;
        let (min, max) = model.scale_limits();
        let step = (max - min) / f64::from(self.config.zoom_button_steps);
        let target = match direction {
            ZoomDirection::In => model.scale() + step,
            ZoomDirection::Out => model.scale() - step,
        };
        self.focal = FocalPoint::window_center(model.window_rect());
        self.set_zoom(target, true)?;
        Ok(EventResult::Handled)
    }

    /// Advances any running fling or zoom animation to `now_ms`.
    ///
    /// Before the first layout this reports an idle, identity frame.
    ///
    /// # Errors
    ///
    /// Propagates [`ZoomViewError::InvalidState`] if the viewport disappears
    /// mid‑tick, which cannot happen through the public API.
    pub fn tick(&mut self, now_ms: u64) -> Result<Tick, ZoomViewError> {
        if self.viewport.is_none() {
            return Ok(Tick {
                redraw: self.take_redraw_request(),
                active: false,
                transform: Affine::IDENTITY,
            });
        }

        if let Some(frame) = self.fling.sample(now_ms) {
            self.model_mut()?.move_window_to(frame.position);
            self.redraw_requested = true;
        }
        if let Some(frame) = self.animation.sample(now_ms) {
            self.set_zoom(frame.scale, false)?;
        }

        let transform = self.model()?.transform();
        let tick = Tick {
            redraw: self.take_redraw_request(),
            active: self.is_animating(),
            transform,
        };
        trace!(now_ms, redraw = tick.redraw, active = tick.active, "tick");
        Ok(tick)
    }

    /// Stops any running fling or zoom animation.
    ///
    /// Returns `true` if something was running.
    pub fn cancel_motion(&mut self) -> bool {
        let fling = self.fling.cancel();
        let animation = self.animation.cancel();
        fling || animation
    }

    /// The host view went away: hide the controls and stop all motion.
    pub fn detach(&mut self) {
        self.controls.set_visible(false);
        self.scaling = false;
        self.cancel_motion();
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Option<ZoomDebugInfo> {
        let model = self.viewport.as_ref()?;
        Some(ZoomDebugInfo {
            content: model.content_rect(),
            screen: model.screen_rect(),
            window: model.window_rect(),
            mapped_content: model.mapped_content_rect(),
            scale: model.scale(),
            min_scale: model.min_scale(),
            max_scale: model.max_scale(),
            small: model.is_small(),
            focal: self.focal,
            fling_active: self.fling.is_active(),
            animation: self.animation.state(),
            scaling: self.scaling,
        })
    }

    fn model(&self) -> Result<&ViewportModel, ZoomViewError> {
        self.viewport.as_ref().ok_or(ZoomViewError::InvalidState)
    }

    fn model_mut(&mut self) -> Result<&mut ViewportModel, ZoomViewError> {
        self.viewport.as_mut().ok_or(ZoomViewError::InvalidState)
    }

    /// Laid out and not in small mode.
    fn interactive(&self) -> Result<bool, ZoomViewError> {
        Ok(!self.model()?.is_small())
    }

    fn capture_focal(&mut self, screen_pt: Point) -> Result<(), ZoomViewError> {
        let model = self.model()?;
        self.focal = FocalPoint::capture(
            model.window_rect(),
            model.scale(),
            model.screen_rect(),
            screen_pt,
        );
        Ok(())
    }
}

/// Keeps the finite components of `v` along overflowing axes and zeroes the rest.
fn pannable(model: &ViewportModel, v: Vec2) -> Vec2 {
    let keep = |axis: Axis| {
        let c = axis.component(v);
        if model.overflows(axis) && c.is_finite() {
            c
        } else {
            0.0
        }
    };
    Vec2::new(keep(Axis::Horizontal), keep(Axis::Vertical))
}

impl<P: FlingPhysics + fmt::Debug> fmt::Debug for ZoomController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("focal", &self.focal)
            .field("controls", &self.controls)
            .field("fling", &self.fling)
            .field("animation", &self.animation)
            .field("scaling", &self.scaling)
            .finish_non_exhaustive()
    }
}
