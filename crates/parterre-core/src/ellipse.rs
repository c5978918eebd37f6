//! Badge anchoring on ellipse boundaries.
//!
//! Badges on ellipse volumes sit on the boundary towards the upper right.
//! The anchor is a closed-form evaluation of the ellipse parametric
//! equation at the fixed parameter corresponding to 45 degrees measured
//! from the top, not a general ray-ellipse intersection.

use crate::geometry::{Point, Size};

/// Computes the badge anchor point on the boundary of the ellipse
/// inscribed in the box at `position` with the given `dimensions`.
///
/// The ellipse center is `(x + width/2, y + height/2)` with semi-axes
/// `a = width/2` and `b = height/2`. Same inputs always yield the same
/// output. Degenerate dimensions yield a degenerate (non-finite) point;
/// guarding against zero-size ellipses is the caller's responsibility.
pub fn badge_anchor(position: Point, dimensions: Size) -> Point {
    let center_x = position.x() + dimensions.width() / 2.0;
    let center_y = position.y() + dimensions.height() / 2.0;

    let a = dimensions.width() / 2.0;
    let b = dimensions.height() / 2.0;

    let half_sqrt_2 = std::f32::consts::SQRT_2 / 2.0;
    let x = (-a * center_y + a * (b * half_sqrt_2 + center_y) + b * center_x) / b;
    let y = center_y - b * half_sqrt_2;

    Point::new(x, y)
}
