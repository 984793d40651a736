//! Client-area crop rectangle derived from a window's bounding box.
//!
//! The region is computed once, when a `WindowCapture` attaches to its
//! window, and is never refreshed. If the window moves or resizes afterwards
//! the region goes stale and coordinate translation silently reports the old
//! position; re-attaching is the caller's job.

use crate::config::CaptureOptions;
use crate::error::{Error, Result};

/// Crop rectangle and screen offset for one window, frozen at attach time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureRegion {
    /// Client-area width in pixels.
    pub width: i32,
    /// Client-area height in pixels.
    pub height: i32,
    /// X of the crop origin, relative to the window's top-left corner.
    pub crop_origin_x: i32,
    /// Y of the crop origin, relative to the window's top-left corner.
    pub crop_origin_y: i32,
    /// Screen X of the first captured pixel.
    pub screen_offset_x: i32,
    /// Screen Y of the first captured pixel.
    pub screen_offset_y: i32,
}

impl CaptureRegion {
    /// Derives the crop rectangle from a full window rectangle
    /// `(left, top, right, bottom)` in screen coordinates.
    ///
    /// The border margin is trimmed from the left, right and bottom edges and
    /// the title-bar margin from the top. Fails with [`Error::EmptyRegion`]
    /// when the margins consume the whole rectangle.
    pub fn from_window_rect(
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        options: &CaptureOptions,
    ) -> Result<Self> {
        let width = (right - left) - 2 * options.border_pixels;
        let height = (bottom - top) - options.titlebar_pixels - options.border_pixels;
        if width <= 0 || height <= 0 {
            return Err(Error::EmptyRegion { width, height });
        }

        Ok(Self {
            width,
            height,
            crop_origin_x: options.border_pixels,
            crop_origin_y: options.titlebar_pixels,
            screen_offset_x: left + options.border_pixels,
            screen_offset_y: top + options.titlebar_pixels,
        })
    }

    /// Translates a pixel position on a captured image to an absolute screen
    /// position.
    ///
    /// Pure offset arithmetic; assumes the window has not moved since the
    /// region was derived. A moved window yields a wrong (not erroring)
    /// result.
    pub fn translate_to_screen(&self, pos: (i32, i32)) -> (i32, i32) {
        (pos.0 + self.screen_offset_x, pos.1 + self.screen_offset_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(rect: (i32, i32, i32, i32)) -> CaptureRegion {
        CaptureRegion::from_window_rect(
            rect.0,
            rect.1,
            rect.2,
            rect.3,
            &CaptureOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_notepad_scenario() {
        // Window at (100,100,900,700) with default 8/30 margins.
        let r = region((100, 100, 900, 700));
        assert_eq!(r.width, 784);
        assert_eq!(r.height, 562);
        assert_eq!((r.crop_origin_x, r.crop_origin_y), (8, 30));
        assert_eq!((r.screen_offset_x, r.screen_offset_y), (108, 130));
    }

    #[test]
    fn test_translate_zero_is_offset() {
        let r = region((100, 100, 900, 700));
        assert_eq!(r.translate_to_screen((0, 0)), (108, 130));
    }

    #[test]
    fn test_translate_is_affine() {
        let r = region((32, 64, 1024, 800));
        let (bx, by) = r.translate_to_screen((10, 20));
        for (dx, dy) in [(1, 0), (0, 1), (-5, 7), (100, -3)] {
            let (tx, ty) = r.translate_to_screen((10 + dx, 20 + dy));
            assert_eq!((tx, ty), (bx + dx, by + dy));
        }
    }

    #[test]
    fn test_custom_margins() {
        let options = CaptureOptions {
            border_pixels: 1,
            titlebar_pixels: 20,
            maximize_on_attach: false,
        };
        let r = CaptureRegion::from_window_rect(0, 0, 100, 100, &options).unwrap();
        assert_eq!(r.width, 98);
        assert_eq!(r.height, 79);
        assert_eq!((r.crop_origin_x, r.crop_origin_y), (1, 20));
        assert_eq!((r.screen_offset_x, r.screen_offset_y), (1, 20));
    }

    #[test]
    fn test_degenerate_rect_is_rejected() {
        let err = CaptureRegion::from_window_rect(0, 0, 16, 200, &CaptureOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyRegion { width: 0, .. }));

        let err = CaptureRegion::from_window_rect(0, 0, 200, 38, &CaptureOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyRegion { height: 0, .. }));
    }

    #[test]
    fn test_negative_origin_window() {
        // Windows on a secondary monitor can have negative screen coordinates.
        let r = region((-1920, -100, -1120, 500));
        assert_eq!(r.width, 784);
        assert_eq!(r.height, 562);
        assert_eq!((r.screen_offset_x, r.screen_offset_y), (-1912, -70));
    }
}
