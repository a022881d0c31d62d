// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Something that can be shown through a [`crate::ZoomController`].
///
/// The controller only needs the content's size; painting stays with the
/// host, which draws the content with [`crate::Frame::transform`].
pub trait ContentSource {
    /// Native size of the content, in content units.
    fn intrinsic_size(&self) -> Size;

    /// Explicitly assigned bounds, if any.
    ///
    /// Non‑empty bounds take precedence over [`ContentSource::intrinsic_size`].
    fn bounds(&self) -> Option<Rect> {
        None
    }
}

impl ContentSource for Size {
    fn intrinsic_size(&self) -> Size {
        *self
    }
}

/// Returns the size the content should be laid out at.
///
/// This is the size of [`ContentSource::bounds`] when they are set and
/// non‑empty, and [`ContentSource::intrinsic_size`] otherwise.
#[must_use]
pub fn resolve_content_size(source: &impl ContentSource) -> Size {
    match source.bounds() {
        Some(bounds) if bounds.width() > 0.0 && bounds.height() > 0.0 => bounds.size(),
        _ => source.intrinsic_size(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ContentSource, resolve_content_size};

    struct Picture {
        intrinsic: Size,
        bounds: Option<Rect>,
    }

    impl ContentSource for Picture {
        fn intrinsic_size(&self) -> Size {
            self.intrinsic
        }

        fn bounds(&self) -> Option<Rect> {
            self.bounds
        }
    }

    #[test]
    fn bounds_take_precedence() {
        let pic = Picture {
            intrinsic: Size::new(10.0, 10.0),
            bounds: Some(Rect::new(0.0, 0.0, 300.0, 200.0)),
        };
        assert_eq!(resolve_content_size(&pic), Size::new(300.0, 200.0));
    }

    #[test]
    fn empty_bounds_fall_back_to_intrinsic() {
        let pic = Picture {
            intrinsic: Size::new(64.0, 48.0),
            bounds: Some(Rect::new(5.0, 5.0, 5.0, 40.0)),
        };
        assert_eq!(resolve_content_size(&pic), Size::new(64.0, 48.0));
        assert_eq!(resolve_content_size(&Size::new(2.0, 3.0)), Size::new(2.0, 3.0));
    }
}
