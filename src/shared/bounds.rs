use crate::vec2f::Vec2f;

use super::shape::Rectangle;

/// Axis-aligned area that movable shapes are kept inside of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Creates new bounds from the edges on each axis.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds that never restrict a position.
    pub fn unbounded() -> Self {
        Self::new(
            f32::NEG_INFINITY,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::INFINITY,
        )
    }

    /// Bounds covering a `width` x `height` area anchored at the origin.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_extent(width: u32, height: u32) -> Self {
        Self::new(0.0, width as f32, 0.0, height as f32)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Checks if a given point is within the bounds, edges included.
    pub fn contains(&self, point: Vec2f) -> bool {
        let within_x = point.0 >= self.min_x && point.0 <= self.max_x;
        let within_y = point.1 >= self.min_y && point.1 <= self.max_y;
        within_x && within_y
    }

    /// Restricts the center of a `geometry` sized shape so its full extent stays inside.
    /// An axis too narrow for the shape centers it on that axis instead.
    pub fn clamp_center(&self, center: Vec2f, geometry: Rectangle) -> Vec2f {
        Vec2f(
            clamp_axis(center.0, self.min_x, self.max_x, geometry.width / 2.0),
            clamp_axis(center.1, self.min_y, self.max_y, geometry.height / 2.0),
        )
    }
}

/// Clamps a single axis, falling back to the midpoint when `lo > hi`.
fn clamp_axis(value: f32, min: f32, max: f32, half: f32) -> f32 {
    let lo = min + half;
    let hi = max - half;
    if lo > hi {
        return min + (max - min) / 2.0;
    }

    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Bounds {
        Bounds::new(0.0, 800.0, 0.0, 600.0)
    }

    #[test]
    fn contains_includes_edges() {
        let bounds = window();
        assert!(bounds.contains(Vec2f(0.0, 0.0)));
        assert!(bounds.contains(Vec2f(800.0, 600.0)));
        assert!(!bounds.contains(Vec2f(800.5, 10.0)));
        assert!(!bounds.contains(Vec2f(10.0, -0.5)));
    }

    #[test]
    fn clamp_center_keeps_extent_inside() {
        let size = Rectangle::new(120.0, 60.0);
        let clamped = window().clamp_center(Vec2f(-50.0, 1000.0), size);
        assert_eq!(clamped, Vec2f(60.0, 570.0));

        let untouched = window().clamp_center(Vec2f(400.0, 300.0), size);
        assert_eq!(untouched, Vec2f(400.0, 300.0));
    }

    #[test]
    fn clamp_center_centers_oversized_axis() {
        let size = Rectangle::new(1000.0, 60.0);
        let clamped = window().clamp_center(Vec2f(10.0, 10.0), size);
        assert_eq!(clamped, Vec2f(400.0, 30.0));
    }

    #[test]
    fn clamp_center_exact_fit_has_one_center() {
        let size = Rectangle::new(120.0, 60.0);
        let snug = Bounds::new(100.0, 220.0, 40.0, 100.0);
        assert_eq!(snug.clamp_center(Vec2f(0.0, 500.0), size), Vec2f(160.0, 70.0));
        assert_eq!(snug.clamp_center(Vec2f(160.0, 70.0), size), Vec2f(160.0, 70.0));
        assert_eq!(clamp_axis(-3.0, 100.0, 220.0, 60.0), 160.0);
    }

    #[test]
    fn unbounded_never_moves_a_point() {
        let size = Rectangle::new(120.0, 60.0);
        let far = Vec2f(-1.0e9, 1.0e9);
        assert_eq!(Bounds::unbounded().clamp_center(far, size), far);
    }

    #[test]
    fn from_extent_anchors_at_origin() {
        let bounds = Bounds::from_extent(800, 600);
        assert_eq!(bounds, window());
        assert_eq!((bounds.width(), bounds.height()), (800.0, 600.0));
    }
}
