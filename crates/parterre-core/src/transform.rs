//! Transform building for positioned, optionally rotated elements.
//!
//! Positioned elements translate by their converted coordinates; rotated
//! elements additionally rotate around the center of their bounding box.
//! The rotate operation precedes the translate in the emitted transform
//! list, matching standard SVG left-to-right application order.

use std::fmt;

use thiserror::Error;

use crate::{
    geometry::Point,
    units::to_render_units,
};

/// Errors raised while deriving element geometry from input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Rotation was requested without both dimensions. The rotation pivot
    /// is the element's center, which cannot be computed without them.
    #[error("rotation by {angle} degrees requires both width and height")]
    MissingDimensions { angle: f32 },
}

/// A rotate operation around a fixed pivot, in render units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rotation {
    angle: f32,
    pivot: Point,
}

/// A 2D transform composed of an optional rotate and an optional translate.
///
/// Construct via [`Transform::for_element`]. The type is a pure value:
/// equal inputs produce equal transforms, so results can be cached keyed on
/// the input tuple if the caller wants to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    rotate: Option<Rotation>,
    translate: Option<Point>,
}

impl Transform {
    /// Builds the transform for an element at `(x, y)` seatmap units with
    /// an optional rotation of `angle` degrees (clockwise).
    ///
    /// Returns `Ok(None)` when the element needs no transform at all
    /// (`x == y == angle == 0`). A non-zero angle requires both `width`
    /// and `height`; the rotation pivot is
    /// `(width/20 + x/10, height/20 + y/10)` in render units.
    ///
    /// # Errors
    ///
    /// [`GeometryError::MissingDimensions`] when `angle != 0` and either
    /// dimension is absent.
    pub fn for_element(
        x: f32,
        y: f32,
        angle: f32,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<Option<Self>, GeometryError> {
        if x == 0.0 && y == 0.0 && angle == 0.0 {
            return Ok(None);
        }

        let rotate = if angle != 0.0 {
            let (Some(width), Some(height)) = (width, height) else {
                return Err(GeometryError::MissingDimensions { angle });
            };
            Some(Rotation {
                angle,
                pivot: Point::new(
                    to_render_units(width) / 2.0 + to_render_units(x),
                    to_render_units(height) / 2.0 + to_render_units(y),
                ),
            })
        } else {
            None
        };

        let translate = (x != 0.0 || y != 0.0)
            .then(|| Point::new(to_render_units(x), to_render_units(y)));

        Ok(Some(Self { rotate, translate }))
    }

    /// Builds a translate-only transform for an element at `(x, y)` seatmap
    /// units. Returns `None` when both coordinates are zero.
    pub fn translation(x: f32, y: f32) -> Option<Self> {
        (x != 0.0 || y != 0.0).then(|| Self {
            rotate: None,
            translate: Some(Point::new(to_render_units(x), to_render_units(y))),
        })
    }

    /// Returns the rotation pivot in render units, if this transform rotates.
    pub fn rotation_pivot(&self) -> Option<Point> {
        self.rotate.map(|rotation| rotation.pivot)
    }

    /// Returns the rotation angle in degrees, if this transform rotates.
    pub fn rotation_angle(&self) -> Option<f32> {
        self.rotate.map(|rotation| rotation.angle)
    }

    /// Returns the translation in render units, if this transform translates.
    pub fn translate(&self) -> Option<Point> {
        self.translate
    }

    /// Applies the transform to a point in render units.
    ///
    /// SVG applies a transform list right-to-left to coordinates, so a
    /// local point is translated first and the result rotated around the
    /// pivot. Used to carry element geometry into the root coordinate
    /// space when computing content bounds.
    pub fn apply(&self, point: Point) -> Point {
        let translated = match self.translate {
            Some(offset) => point.add_point(offset),
            None => point,
        };
        match self.rotate {
            Some(Rotation { angle, pivot }) => {
                let radians = angle.to_radians();
                let (sin, cos) = radians.sin_cos();
                let relative = translated.sub_point(pivot);
                Point::new(
                    pivot.x() + relative.x() * cos - relative.y() * sin,
                    pivot.y() + relative.x() * sin + relative.y() * cos,
                )
            }
            None => translated,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut needs_space = false;
        if let Some(Rotation { angle, pivot }) = self.rotate {
            write!(f, "rotate({} {} {})", angle, pivot.x(), pivot.y())?;
            needs_space = true;
        }
        if let Some(offset) = self.translate {
            if needs_space {
                write!(f, " ")?;
            }
            write!(f, "translate({}, {})", offset.x(), offset.y())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_no_transform_at_origin() {
        let transform = Transform::for_element(0.0, 0.0, 0.0, None, None).unwrap();
        assert_eq!(transform, None);
    }

    #[test]
    fn test_translate_only() {
        let transform = Transform::for_element(100.0, 50.0, 0.0, None, None)
            .unwrap()
            .unwrap();
        assert_eq!(transform.to_string(), "translate(10, 5)");
        assert_eq!(transform.rotation_pivot(), None);
    }

    #[test]
    fn test_translation_helper_matches_for_element() {
        assert_eq!(Transform::translation(0.0, 0.0), None);
        assert_eq!(
            Transform::translation(30.0, 40.0),
            Transform::for_element(30.0, 40.0, 0.0, None, None).unwrap()
        );
    }

    #[test]
    fn test_rotation_without_dimensions_fails() {
        let missing_both = Transform::for_element(0.0, 0.0, 45.0, None, None);
        assert_eq!(
            missing_both,
            Err(GeometryError::MissingDimensions { angle: 45.0 })
        );

        let missing_height = Transform::for_element(0.0, 0.0, 45.0, Some(100.0), None);
        assert!(missing_height.is_err());

        let missing_width = Transform::for_element(0.0, 0.0, 45.0, None, Some(100.0));
        assert!(missing_width.is_err());
    }

    #[test]
    fn test_rotation_pivot() {
        // Pivot is (width/20 + x/10, height/20 + y/10)
        let transform = Transform::for_element(100.0, 200.0, 90.0, Some(40.0), Some(60.0))
            .unwrap()
            .unwrap();
        let pivot = transform.rotation_pivot().unwrap();
        assert_approx_eq!(f32, pivot.x(), 12.0); // 40/20 + 100/10
        assert_approx_eq!(f32, pivot.y(), 23.0); // 60/20 + 200/10
    }

    #[test]
    fn test_rotation_with_zero_dimensions_is_legal() {
        // Zero dimensions are present dimensions; the pivot degenerates to
        // the translated origin.
        let transform = Transform::for_element(50.0, 0.0, 30.0, Some(0.0), Some(0.0))
            .unwrap()
            .unwrap();
        assert_eq!(transform.rotation_pivot(), Some(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_display_rotate_before_translate() {
        let transform = Transform::for_element(100.0, 200.0, 45.0, Some(100.0), Some(100.0))
            .unwrap()
            .unwrap();
        assert_eq!(
            transform.to_string(),
            "rotate(45 15 25) translate(10, 20)"
        );
    }

    #[test]
    fn test_display_rotate_only() {
        // Pure rotation around the element center at the origin.
        let transform = Transform::for_element(0.0, 0.0, 180.0, Some(20.0), Some(20.0))
            .unwrap()
            .unwrap();
        assert_eq!(transform.to_string(), "rotate(180 1 1)");
    }

    #[test]
    fn test_apply_translate() {
        let transform = Transform::translation(100.0, 50.0).unwrap();
        assert_eq!(
            transform.apply(Point::new(1.0, 2.0)),
            Point::new(11.0, 7.0)
        );
    }

    #[test]
    fn test_apply_rotation_moves_corner_around_center() {
        // A 10x10 render-unit box at the origin rotated 180 degrees maps
        // its top-left corner onto its bottom-right corner.
        let transform = Transform::for_element(0.0, 0.0, 180.0, Some(100.0), Some(100.0))
            .unwrap()
            .unwrap();
        let mapped = transform.apply(Point::new(0.0, 0.0));
        assert_approx_eq!(f32, mapped.x(), 10.0, epsilon = 1e-4);
        assert_approx_eq!(f32, mapped.y(), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_apply_rotation_after_translation() {
        // Translate by (10, 0) render units, then rotate 90 degrees
        // clockwise around the pivot (15, 5): local origin lands at the
        // pivot's x offset mirrored into y.
        let transform = Transform::for_element(100.0, 0.0, 90.0, Some(100.0), Some(100.0))
            .unwrap()
            .unwrap();
        let mapped = transform.apply(Point::new(0.0, 0.0));
        assert_approx_eq!(f32, mapped.x(), 20.0, epsilon = 1e-4);
        assert_approx_eq!(f32, mapped.y(), 0.0, epsilon = 1e-4);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn coordinate_strategy() -> impl Strategy<Value = f32> {
        -10_000.0f32..10_000.0
    }

    fn dimension_strategy() -> impl Strategy<Value = f32> {
        0.0f32..10_000.0
    }

    proptest! {
        /// The pivot always equals (width/20 + x/10, height/20 + y/10).
        #[test]
        fn pivot_formula_holds(
            x in coordinate_strategy(),
            y in coordinate_strategy(),
            angle in 1.0f32..360.0,
            width in dimension_strategy(),
            height in dimension_strategy(),
        ) {
            let transform = Transform::for_element(x, y, angle, Some(width), Some(height))
                .unwrap()
                .unwrap();
            let pivot = transform.rotation_pivot().unwrap();
            prop_assert!(approx_eq!(f32, pivot.x(), width / 20.0 + x / 10.0, epsilon = 1e-2));
            prop_assert!(approx_eq!(f32, pivot.y(), height / 20.0 + y / 10.0, epsilon = 1e-2));
        }

        /// A missing dimension always fails for non-zero angles.
        #[test]
        fn missing_dimension_always_fails(
            x in coordinate_strategy(),
            y in coordinate_strategy(),
            angle in 1.0f32..360.0,
            width in dimension_strategy(),
        ) {
            prop_assert!(Transform::for_element(x, y, angle, Some(width), None).is_err());
            prop_assert!(Transform::for_element(x, y, angle, None, Some(width)).is_err());
            prop_assert!(Transform::for_element(x, y, angle, None, None).is_err());
        }

        /// Applying a pure translation preserves distances from the offset.
        #[test]
        fn translation_is_rigid(
            x in coordinate_strategy(),
            y in coordinate_strategy(),
            px in coordinate_strategy(),
            py in coordinate_strategy(),
        ) {
            prop_assume!(x != 0.0 || y != 0.0);
            let transform = Transform::translation(x, y).unwrap();
            let mapped = transform.apply(Point::new(px, py));
            prop_assert!(approx_eq!(f32, mapped.x() - px, x / 10.0, epsilon = 1e-2));
            prop_assert!(approx_eq!(f32, mapped.y() - py, y / 10.0, epsilon = 1e-2));
        }
    }
}
