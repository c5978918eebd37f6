//! Seatmap-unit to render-unit conversion.
//!
//! Input data is authored in seatmap units at a fixed 10:1 ratio to the
//! units used for actual rendering. Every length or coordinate crossing
//! into rendering space goes through [`to_render_units`].

use crate::geometry::{Point, Size};

/// Number of seatmap units per render unit.
pub const UNITS_PER_RENDER_UNIT: f32 = 10.0;

/// Converts a length or coordinate from seatmap units to render units.
pub fn to_render_units(value: f32) -> f32 {
    value / UNITS_PER_RENDER_UNIT
}

/// Converts a point from seatmap units to render units.
pub fn point_to_render_units(point: Point) -> Point {
    point.scale(1.0 / UNITS_PER_RENDER_UNIT)
}

/// Converts a size from seatmap units to render units.
pub fn size_to_render_units(size: Size) -> Size {
    size.scale(1.0 / UNITS_PER_RENDER_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_render_units() {
        assert_eq!(to_render_units(100.0), 10.0);
        assert_eq!(to_render_units(0.0), 0.0);
        assert_eq!(to_render_units(-50.0), -5.0);
        assert_eq!(to_render_units(5.0), 0.5);
    }

    #[test]
    fn test_point_to_render_units() {
        let converted = point_to_render_units(Point::new(450.0, 30.0));
        assert_eq!(converted, Point::new(45.0, 3.0));
    }

    #[test]
    fn test_size_to_render_units() {
        let converted = size_to_render_units(Size::new(200.0, 100.0));
        assert_eq!(converted, Size::new(20.0, 10.0));
    }
}
