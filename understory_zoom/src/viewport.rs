// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::error::ZoomViewError;
use crate::focal::FocalPoint;
use crate::modes::{Axis, AxisFit};

/// Geometry of a content surface shown through a fixed screen.
///
/// `ViewportModel` owns four rectangles:
/// - the **content** rect, the surface's native bounds with origin `(0, 0)`;
/// - the **screen** rect, the fixed device viewport with origin `(0, 0)`;
/// - the **window** rect, the part of content space currently mapped onto the
///   whole screen, sized `screen / scale`;
/// - the **mapped content** rect, the content rect pushed through the current
///   transform into screen space.
///
/// The transform is derived from the window and screen rects and is never set
/// directly. Every mutation recomputes the transform and mapped content and
/// re‑applies the per‑axis clamp/center policy (see [`AxisFit`]) as one step,
/// so readers always observe a consistent state.
#[derive(Clone, Debug)]
pub struct ViewportModel {
    content: Rect,
    screen: Rect,
    window: Rect,
    mapped_content: Rect,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    transform: Affine,
}

impl ViewportModel {
    /// Lays out `content_size` on a screen of `screen_size`.
    ///
    /// The minimum scale fits the whole content on screen; the model starts at
    /// that scale with the window centered on the content. `max_scale` is the
    /// upper zoom limit.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomViewError::InvalidContentSize`] or
    /// [`ZoomViewError::InvalidScreenSize`] if either size has a non‑positive
    /// (or NaN) dimension.
    pub fn layout(
        content_size: Size,
        screen_size: Size,
        max_scale: f64,
    ) -> Result<Self, ZoomViewError> {
        if !(content_size.width > 0.0 && content_size.height > 0.0) {
            return Err(ZoomViewError::InvalidContentSize {
                width: content_size.width,
                height: content_size.height,
            });
        }
        if !(screen_size.width > 0.0 && screen_size.height > 0.0) {
            return Err(ZoomViewError::InvalidScreenSize {
                width: screen_size.width,
                height: screen_size.height,
            });
        }

        let min_scale = (screen_size.width / content_size.width)
            .min(screen_size.height / content_size.height);
        let content = Rect::from_origin_size(Point::ZERO, content_size);
        let screen = Rect::from_origin_size(Point::ZERO, screen_size);
        let window = Rect::from_origin_size(Point::ZERO, Self::window_size(screen, min_scale));

        let mut model = Self {
            content,
            screen,
            window,
            mapped_content: content,
            scale: min_scale,
            min_scale,
            max_scale,
            transform: Affine::IDENTITY,
        };
        model.recompute_transform();
        model.clamp_window();

        debug!(
            content_w = content_size.width,
            content_h = content_size.height,
            screen_w = screen_size.width,
            screen_h = screen_size.height,
            min_scale,
            small = model.is_small(),
            "viewport laid out"
        );
        Ok(model)
    }

    /// Returns the content rect.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content
    }

    /// Returns the screen rect.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen
    }

    /// Returns the window rect in content space.
    #[must_use]
    pub fn window_rect(&self) -> Rect {
        self.window
    }

    /// Returns the content rect mapped into screen space.
    #[must_use]
    pub fn mapped_content_rect(&self) -> Rect {
        self.mapped_content
    }

    /// Returns the content‑to‑screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the scale at which the whole content fits on screen.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the configured maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns `true` if the content already fits at the maximum scale.
    ///
    /// Gestures are disabled in this mode.
    #[must_use]
    pub fn is_small(&self) -> bool {
        self.min_scale >= self.max_scale
    }

    /// Returns the effective `(min, max)` scale range.
    ///
    /// In small mode the range collapses onto the minimum scale.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale.max(self.min_scale))
    }

    /// Clamps `scale` into [`ViewportModel::scale_limits`].
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let (min, max) = self.scale_limits();
        scale.clamp(min, max)
    }

    /// Returns `true` if `scale` lies inside [`ViewportModel::scale_limits`].
    #[must_use]
    pub fn scale_in_range(&self, scale: f64) -> bool {
        let (min, max) = self.scale_limits();
        min <= scale && scale <= max
    }

    /// Returns the clamp/center policy currently in effect along `axis`.
    #[must_use]
    pub fn axis_fit(&self, axis: Axis) -> AxisFit {
        AxisFit::classify(axis.extent(self.mapped_content), axis.extent(self.screen))
    }

    /// Returns `true` if the rendered content is larger than the screen along `axis`.
    #[must_use]
    pub fn overflows(&self, axis: Axis) -> bool {
        self.axis_fit(axis).overflows()
    }

    /// Recomputes the transform and the mapped content rect from the window.
    ///
    /// The transform is the fill mapping of the window rect onto the screen
    /// rect. Since the window always has the screen's aspect ratio, both
    /// scale factors agree up to rounding.
    pub fn recompute_transform(&mut self) {
        let sx = self.screen.width() / self.window.width();
        let sy = self.screen.height() / self.window.height();
        self.transform = Affine::translate(self.screen.origin().to_vec2())
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-self.window.origin().to_vec2());
        self.mapped_content = self.transform.transform_rect_bbox(self.content);
    }

    /// Applies the per‑axis clamp/center policy to the window.
    ///
    /// Returns `true` if the window moved. Calling this twice in a row leaves
    /// the window where the first call put it.
    pub fn clamp_window(&mut self) -> bool {
        let mut origin = self.window.origin();
        for axis in Axis::BOTH {
            let start = self
                .axis_fit(axis)
                .resolve(axis.edges(self.window), axis.edges(self.content));
            match axis {
                Axis::Horizontal => origin.x = start,
                Axis::Vertical => origin.y = start,
            }
        }
        let moved = origin != self.window.origin();
        if moved {
            self.window = self.window.with_origin(origin);
        }
        self.recompute_transform();
        moved
    }

    /// Sets the scale and re‑anchors the window on `focal`.
    ///
    /// `scale` is applied as given; callers clamp it first when needed.
    pub fn zoom_to(&mut self, scale: f64, focal: &FocalPoint) {
        self.scale = scale;
        self.window = focal.anchor_window(Self::window_size(self.screen, scale));
        self.recompute_transform();
        self.clamp_window();
        trace!(scale, x = self.window.x0, y = self.window.y0, "zoomed");
    }

    /// Moves the window by `delta` content units, then re‑clamps.
    pub fn offset_window(&mut self, delta: Vec2) {
        self.window = self.window + delta;
        self.recompute_transform();
        self.clamp_window();
    }

    /// Moves the window's origin to `origin`, then re‑clamps.
    pub fn move_window_to(&mut self, origin: Point) {
        self.window = self.window.with_origin(origin);
        self.recompute_transform();
        self.clamp_window();
    }

    /// Converts a content‑space point into screen coordinates.
    #[must_use]
    pub fn content_to_screen(&self, pt: Point) -> Point {
        self.transform * pt
    }

    /// Converts a screen‑space point into content coordinates.
    #[must_use]
    pub fn screen_to_content(&self, pt: Point) -> Point {
        self.transform.inverse() * pt
    }

    fn window_size(screen: Rect, scale: f64) -> Size {
        Size::new(screen.width() / scale, screen.height() / scale)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::ViewportModel;
    use crate::error::ZoomViewError;
    use crate::focal::FocalPoint;
    use crate::modes::{Axis, AxisFit};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn layout_rejects_empty_content() {
        let err = ViewportModel::layout(Size::new(0.0, 10.0), Size::new(100.0, 100.0), 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            ZoomViewError::InvalidContentSize {
                width: 0.0,
                height: 10.0
            }
        );
        assert!(matches!(
            ViewportModel::layout(Size::new(10.0, -1.0), Size::new(100.0, 100.0), 1.0),
            Err(ZoomViewError::InvalidContentSize { .. })
        ));
    }

    #[test]
    fn layout_rejects_empty_screen() {
        assert!(matches!(
            ViewportModel::layout(Size::new(10.0, 10.0), Size::new(100.0, 0.0), 1.0),
            Err(ZoomViewError::InvalidScreenSize { .. })
        ));
    }

    #[test]
    fn layout_height_bound_content_centers_width() {
        let vp = ViewportModel::layout(Size::new(4000.0, 3000.0), Size::new(1000.0, 500.0), 1.0)
            .unwrap();
        assert!(close(vp.min_scale(), 500.0 / 3000.0));
        assert_eq!(vp.scale(), vp.min_scale());

        let window = vp.window_rect();
        assert!(close(window.width(), 6000.0));
        assert!(close(window.height(), 3000.0));
        // Rendered width (~667px) fits the 1000px screen, so the window is
        // centered and reaches past both content edges.
        assert_eq!(vp.axis_fit(Axis::Horizontal), AxisFit::Fitted);
        assert!(close(window.x0, -1000.0));
        assert!(close(window.y0, 0.0));

        let mapped = vp.mapped_content_rect();
        assert!(close(mapped.width(), 4000.0 / 6.0));
        assert!(close(mapped.height(), 500.0));
    }

    #[test]
    fn transform_maps_window_onto_screen() {
        let vp = ViewportModel::layout(Size::new(800.0, 800.0), Size::new(400.0, 200.0), 1.0)
            .unwrap();
        let window = vp.window_rect();
        let top_left = vp.content_to_screen(window.origin());
        let bottom_right = vp.content_to_screen(Point::new(window.x1, window.y1));
        assert!(close(top_left.x, 0.0) && close(top_left.y, 0.0));
        assert!(close(bottom_right.x, 400.0) && close(bottom_right.y, 200.0));

        let back = vp.screen_to_content(Point::new(200.0, 100.0));
        assert!(close(back.x, window.center().x));
        assert!(close(back.y, window.center().y));
    }

    #[test]
    fn clamp_window_is_idempotent() {
        let mut vp = ViewportModel::layout(Size::new(2000.0, 1000.0), Size::new(500.0, 500.0), 1.0)
            .unwrap();
        vp.zoom_to(1.0, &FocalPoint::window_center(vp.window_rect()));
        vp.offset_window(Vec2::new(-5000.0, 7000.0));
        let once = vp.window_rect();
        assert!(!vp.clamp_window());
        assert_eq!(vp.window_rect(), once);
    }

    #[test]
    fn small_content_collapses_scale_range() {
        let vp = ViewportModel::layout(Size::new(100.0, 50.0), Size::new(1000.0, 1000.0), 1.0)
            .unwrap();
        assert!(vp.is_small());
        assert_eq!(vp.scale_limits(), (10.0, 10.0));
        assert_eq!(vp.clamp_scale(0.5), 10.0);
    }

    #[test]
    fn zoom_to_anchors_center_focal_on_screen_center() {
        let mut vp = ViewportModel::layout(Size::new(4000.0, 3000.0), Size::new(1000.0, 500.0), 1.0)
            .unwrap();
        let focal = FocalPoint::new(Point::new(2000.0, 1500.0), Point::new(0.5, 0.5));
        for scale in [0.2, 0.35, 0.5, 0.8, 1.0] {
            vp.zoom_to(scale, &focal);
            let projected = vp.content_to_screen(focal.content);
            assert!(close(projected.x, 500.0), "x drifted at scale {scale}");
            assert!(close(projected.y, 250.0), "y drifted at scale {scale}");
        }
    }

    #[test]
    fn zoom_to_clamps_window_into_content() {
        let mut vp = ViewportModel::layout(Size::new(4000.0, 3000.0), Size::new(1000.0, 500.0), 1.0)
            .unwrap();
        // Focal content point in the top-left corner, pinned to screen center.
        let focal = FocalPoint::new(Point::new(0.0, 0.0), Point::new(0.5, 0.5));
        vp.zoom_to(1.0, &focal);
        let window = vp.window_rect();
        assert!(close(window.x0, 0.0));
        assert!(close(window.y0, 0.0));
        assert!(close(window.width(), 1000.0));
    }

    #[test]
    fn offset_window_on_fitted_axis_is_recentred() {
        let mut vp = ViewportModel::layout(Size::new(4000.0, 500.0), Size::new(1000.0, 500.0), 1.0)
            .unwrap();
        // min scale 0.25: rendered height 125 fits, rendered width 1000 fits too.
        vp.zoom_to(1.0, &FocalPoint::window_center(vp.window_rect()));
        assert!(vp.overflows(Axis::Horizontal));
        assert!(!vp.overflows(Axis::Vertical));
        let before = vp.window_rect();
        vp.offset_window(Vec2::new(100.0, 100.0));
        let after = vp.window_rect();
        assert!(close(after.x0, before.x0 + 100.0));
        assert!(close(after.y0, before.y0));
    }
}
