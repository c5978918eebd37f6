//! Content bounds computation and tracking.
//!
//! The root viewbox is the smallest box enclosing all rendered geometry.
//! [`compute_bounds`] is a pure function over a tree snapshot; the host
//! rendering layer decides when to call [`ContentBoundsTracker::refresh`]
//! — once after the tree is built, and again after every mutation it
//! makes. Recomputing an unchanged box publishes nothing.

use log::debug;

use parterre_core::{
    geometry::{Bounds, Point, Size},
    text,
    transform::Transform,
};

use crate::tree::{Node, Shape, ShapeKind, TextAnchor, TextNode};

/// Computes the smallest bounding box enclosing all rendered geometry.
///
/// `label_font_size` resolves responsive text so measured extents match
/// what will be rendered. An empty tree yields the degenerate box
/// `(0, 0, 0, 0)`; hidden text contributes nothing.
pub fn compute_bounds(root: &Node, label_font_size: f32) -> Bounds {
    let mut ancestors = Vec::new();
    node_bounds(root, &mut ancestors, label_font_size).unwrap_or_default()
}

fn node_bounds(
    node: &Node,
    ancestors: &mut Vec<Transform>,
    label_font_size: f32,
) -> Option<Bounds> {
    match node {
        Node::Group(group) => {
            let pushed = match group.transform() {
                Some(transform) => {
                    ancestors.push(*transform);
                    true
                }
                None => false,
            };
            let mut merged: Option<Bounds> = None;
            for child in group.children() {
                if let Some(bounds) = node_bounds(child, ancestors, label_font_size) {
                    merged = Some(match merged {
                        Some(existing) => existing.merge(&bounds),
                        None => bounds,
                    });
                }
            }
            if pushed {
                ancestors.pop();
            }
            merged
        }
        Node::Shape(shape) => Some(project(
            shape_local_bounds(shape),
            shape.transform(),
            ancestors,
        )),
        Node::Text(text) => {
            let local = text_local_bounds(text, label_font_size)?;
            Some(project(local, text.transform(), ancestors))
        }
    }
}

fn shape_local_bounds(shape: &Shape) -> Bounds {
    match shape.kind() {
        ShapeKind::Rect { origin, size, .. } => Bounds::from_origin_size(origin, size),
        ShapeKind::Circle { center, radius } => Bounds::from_origin_size(
            Point::new(center.x() - radius, center.y() - radius),
            Size::new(radius * 2.0, radius * 2.0),
        ),
        ShapeKind::Ellipse { center, radii } => Bounds::from_origin_size(
            Point::new(center.x() - radii.width(), center.y() - radii.height()),
            radii.scale(2.0),
        ),
    }
}

fn text_local_bounds(text: &TextNode, label_font_size: f32) -> Option<Bounds> {
    if text.hidden() {
        return None;
    }
    let size = text::measure(text.content(), text.resolved_font_size(label_font_size));
    let position = text.position();
    let origin = match text.anchor() {
        TextAnchor::Middle => Point::new(
            position.x() - size.width() / 2.0,
            position.y() - size.height() / 2.0,
        ),
        TextAnchor::Start => Point::new(position.x(), position.y() - size.height()),
    };
    Some(Bounds::from_origin_size(origin, size))
}

/// Carries local bounds into the root coordinate space: the node's own
/// transform first, then each ancestor transform from the innermost out.
/// Rotated boxes contribute the bounding box of their transformed corners.
fn project(local: Bounds, own: Option<&Transform>, ancestors: &[Transform]) -> Bounds {
    let corners = local.corners().map(|corner| {
        let mut point = corner;
        if let Some(transform) = own {
            point = transform.apply(point);
        }
        for transform in ancestors.iter().rev() {
            point = transform.apply(point);
        }
        point
    });
    Bounds::enclosing(corners).expect("a box always has four corners")
}

/// Caches the last published bounding box and suppresses redundant
/// updates. One tracker per rendered root; dropped with it.
#[derive(Debug, Default)]
pub struct ContentBoundsTracker {
    current: Option<Bounds>,
}

impl ContentBoundsTracker {
    /// Creates a tracker that has not observed any content yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the bounding box for the given tree snapshot.
    ///
    /// Returns `Some(bounds)` when the box changed (including the first
    /// call), `None` when it is componentwise equal to the previous one.
    pub fn refresh(&mut self, tree: &Node, label_font_size: f32) -> Option<Bounds> {
        let computed = compute_bounds(tree, label_font_size);
        if self.current == Some(computed) {
            return None;
        }
        debug!(
            min_x = computed.min_x(),
            min_y = computed.min_y(),
            width = computed.width(),
            height = computed.height();
            "Content bounds changed"
        );
        self.current = Some(computed);
        Some(computed)
    }

    /// Returns the current viewbox: the last published bounds, or the
    /// degenerate `(0, 0, 0, 0)` box before the first refresh.
    pub fn view_box(&self) -> Bounds {
        self.current.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use parterre_core::transform::Transform;

    use crate::tree::{FontSize, Group, Node};

    use super::*;

    fn rect(origin: Point, size: Size) -> Node {
        Node::Shape(Shape::new(ShapeKind::Rect {
            origin,
            size,
            corner_radius: 0.0,
        }))
    }

    #[test]
    fn test_empty_tree_is_degenerate_zero_box() {
        let bounds = compute_bounds(&Node::Group(Group::new()), 6.0);
        assert_eq!(bounds, Bounds::default());
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_single_rect_bounds() {
        let tree = Node::Group(Group::new().add(rect(Point::new(1.0, 2.0), Size::new(3.0, 4.0))));
        let bounds = compute_bounds(&tree, 6.0);
        assert_eq!(bounds.min_x(), 1.0);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_x(), 4.0);
        assert_eq!(bounds.max_y(), 6.0);
    }

    #[test]
    fn test_sibling_bounds_merge() {
        let tree = Node::Group(
            Group::new()
                .add(rect(Point::new(0.0, 0.0), Size::new(2.0, 2.0)))
                .add(rect(Point::new(10.0, -5.0), Size::new(2.0, 2.0))),
        );
        let bounds = compute_bounds(&tree, 6.0);
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), -5.0);
        assert_eq!(bounds.max_x(), 12.0);
        assert_eq!(bounds.max_y(), 2.0);
    }

    #[test]
    fn test_group_transform_translates_children() {
        // 100 seatmap units = 10 render units of translation.
        let tree = Node::Group(
            Group::new()
                .with_transform(Transform::translation(100.0, 100.0))
                .add(rect(Point::new(0.0, 0.0), Size::new(2.0, 2.0))),
        );
        let bounds = compute_bounds(&tree, 6.0);
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 10.0);
    }

    #[test]
    fn test_rotated_rect_contributes_transformed_corners() {
        // A 20x10 render-unit rect rotated 90 degrees around its center
        // occupies a 10x20 box around the same center.
        let transform = Transform::for_element(0.0, 0.0, 90.0, Some(200.0), Some(100.0))
            .unwrap()
            .unwrap();
        let tree = Node::Group(Group::new().add(Node::Shape(
            Shape::new(ShapeKind::Rect {
                origin: Point::default(),
                size: Size::new(20.0, 10.0),
                corner_radius: 0.0,
            })
            .with_transform(Some(transform)),
        )));
        let bounds = compute_bounds(&tree, 6.0);
        assert_approx_eq!(f32, bounds.min_x(), 5.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.max_x(), 15.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.min_y(), -5.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.max_y(), 15.0, epsilon = 1e-3);
    }

    #[test]
    fn test_circle_and_ellipse_bounds() {
        let circle = Node::Shape(Shape::new(ShapeKind::Circle {
            center: Point::new(5.0, 5.0),
            radius: 2.0,
        }));
        let bounds = compute_bounds(&Node::Group(Group::new().add(circle)), 6.0);
        assert_eq!(bounds.min_x(), 3.0);
        assert_eq!(bounds.max_x(), 7.0);

        let ellipse = Node::Shape(Shape::new(ShapeKind::Ellipse {
            center: Point::new(10.0, 5.0),
            radii: Size::new(10.0, 5.0),
        }));
        let bounds = compute_bounds(&Node::Group(Group::new().add(ellipse)), 6.0);
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_x(), 20.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_y(), 10.0);
    }

    #[test]
    fn test_hidden_text_contributes_nothing() {
        let tree = Node::Group(
            Group::new()
                .add(rect(Point::new(0.0, 0.0), Size::new(1.0, 1.0)))
                .add(Node::Text(
                    TextNode::new("far away", Point::new(1000.0, 1000.0), FontSize::Responsive)
                        .with_hidden(true),
                )),
        );
        let bounds = compute_bounds(&tree, 6.0);
        assert_eq!(bounds.max_x(), 1.0);
        assert_eq!(bounds.max_y(), 1.0);
    }

    #[test]
    fn test_visible_text_extends_bounds() {
        let tree = Node::Group(
            Group::new()
                .add(rect(Point::new(0.0, 0.0), Size::new(1.0, 1.0)))
                .add(Node::Text(TextNode::new(
                    "Stage",
                    Point::new(100.0, 100.0),
                    FontSize::Fixed(10.0),
                ))),
        );
        let bounds = compute_bounds(&tree, 6.0);
        assert!(bounds.max_x() > 50.0);
        assert!(bounds.max_y() > 50.0);
    }

    #[test]
    fn test_tracker_publishes_first_refresh() {
        let tree = Node::Group(Group::new());
        let mut tracker = ContentBoundsTracker::new();
        assert_eq!(tracker.view_box(), Bounds::default());
        // Even a degenerate first box publishes once.
        assert!(tracker.refresh(&tree, 6.0).is_some());
    }

    #[test]
    fn test_tracker_suppresses_identical_box() {
        let tree = Node::Group(Group::new().add(rect(Point::new(0.0, 0.0), Size::new(4.0, 4.0))));
        let mut tracker = ContentBoundsTracker::new();
        assert!(tracker.refresh(&tree, 6.0).is_some());
        assert_eq!(tracker.refresh(&tree, 6.0), None);
        assert_eq!(tracker.view_box().width(), 4.0);
    }

    #[test]
    fn test_tracker_republishes_after_mutation() {
        let mut tracker = ContentBoundsTracker::new();
        let tree = Node::Group(Group::new().add(rect(Point::new(0.0, 0.0), Size::new(4.0, 4.0))));
        tracker.refresh(&tree, 6.0);

        // Simulated content mutation: a node is added to the tree.
        let mutated = Node::Group(
            Group::new()
                .add(rect(Point::new(0.0, 0.0), Size::new(4.0, 4.0)))
                .add(rect(Point::new(10.0, 0.0), Size::new(4.0, 4.0))),
        );
        let republished = tracker.refresh(&mutated, 6.0).unwrap();
        assert_eq!(republished.max_x(), 14.0);
    }
}
