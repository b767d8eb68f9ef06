//! Screen-space conversions for pointer and touch coordinates.
//!
//! Two normalized spaces are used: screen fraction (`[0, 1]` across the
//! surface, y down) for zoom and pan anchors, and circle space (centered,
//! `[-1, 1]` across the width, y up) for rotate anchors.

use glam::Vec2;

/// Bounding box of the input surface in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in page units.
    pub width: f32,
    /// Height in page units.
    pub height: f32,
}

/// The element that delivers pointer/touch input.
pub trait InputSurface {
    /// Bounding box of the element in page coordinates, when it has one.
    fn bounding_rect(&self) -> Option<ScreenRect>;

    /// Full viewport size `(width, height)`, used when there is no element
    /// rect (the surface is the whole window/document).
    fn viewport(&self) -> (f32, f32);
}

impl ScreenRect {
    /// Rect at `(left, top)` spanning `width × height`.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Read the surface's bounding box, falling back to the full viewport.
    #[must_use]
    pub fn from_surface(surface: &dyn InputSurface) -> Self {
        surface.bounding_rect().unwrap_or_else(|| {
            let (width, height) = surface.viewport();
            Self::new(0.0, 0.0, width, height)
        })
    }

    /// Whether both extents are positive; conversions divide by them.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Page point as a fraction of the surface, `(0, 0)` top-left.
    #[must_use]
    pub fn to_screen_fraction(&self, page_x: f32, page_y: f32) -> Vec2 {
        Vec2::new(
            (page_x - self.left) / self.width,
            (page_y - self.top) / self.height,
        )
    }

    /// Page point in circle space: x in `[-1, 1]` across the width, y up.
    ///
    /// Both axes divide by the width so a drag covers the same angle
    /// horizontally and vertically.
    #[must_use]
    pub fn to_circle_space(&self, page_x: f32, page_y: f32) -> Vec2 {
        Vec2::new(
            (page_x - self.width * 0.5 - self.left) / (self.width * 0.5),
            (self.height + 2.0 * (self.top - page_y)) / self.width,
        )
    }
}

impl InputSurface for ScreenRect {
    fn bounding_rect(&self) -> Option<ScreenRect> {
        Some(*self)
    }

    fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window(f32, f32);

    impl InputSurface for Window {
        fn bounding_rect(&self) -> Option<ScreenRect> {
            None
        }

        fn viewport(&self) -> (f32, f32) {
            (self.0, self.1)
        }
    }

    #[test]
    fn screen_fraction_spans_unit_square() {
        let rect = ScreenRect::new(100.0, 50.0, 400.0, 200.0);
        assert_eq!(rect.to_screen_fraction(100.0, 50.0), Vec2::ZERO);
        assert_eq!(rect.to_screen_fraction(500.0, 250.0), Vec2::ONE);
        assert_eq!(rect.to_screen_fraction(300.0, 150.0), Vec2::splat(0.5));
    }

    #[test]
    fn circle_space_of_center_is_origin() {
        let rect = ScreenRect::new(0.0, 0.0, 800.0, 600.0);
        let p = rect.to_circle_space(400.0, 300.0);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn circle_space_divides_height_by_width() {
        let rect = ScreenRect::new(0.0, 0.0, 800.0, 600.0);
        // Top edge: (600 + 0) / 800
        assert!((rect.to_circle_space(400.0, 0.0).y - 0.75).abs() < 1e-6);
        // Bottom edge: (600 - 1200) / 800
        assert!((rect.to_circle_space(400.0, 600.0).y + 0.75).abs() < 1e-6);
        // Right edge maps to x = 1
        assert!((rect.to_circle_space(800.0, 0.0).x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn surface_without_rect_falls_back_to_viewport() {
        let rect = ScreenRect::from_surface(&Window(1024.0, 768.0));
        assert_eq!(rect, ScreenRect::new(0.0, 0.0, 1024.0, 768.0));
    }

    #[test]
    fn degenerate_rect_is_detected() {
        assert!(ScreenRect::default().is_degenerate());
        assert!(!ScreenRect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }
}
