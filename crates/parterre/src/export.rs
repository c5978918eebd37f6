//! SVG document assembly.
//!
//! Renders a visual tree into an `svg::Document` whose viewbox is the
//! tracked content bounds and whose root carries the configured
//! accessibility attributes.

use log::debug;
use svg::Document;

use parterre_core::geometry::Bounds;

use crate::{config::RenderConfig, tree::Node};

/// Builds the SVG document for a rendered tree.
///
/// The viewbox is `minX minY width height` of the given bounds; the root
/// is announced as a labelled group.
pub(crate) fn render_document(
    tree: &Node,
    view_box: Bounds,
    label_font_size: f32,
    config: &RenderConfig,
) -> Document {
    debug!(
        width = view_box.width(),
        height = view_box.height();
        "Rendering SVG document"
    );

    let mut doc = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                view_box.min_x(),
                view_box.min_y(),
                view_box.width(),
                view_box.height()
            ),
        )
        .set("role", "group")
        .set("aria-label", config.aria_label());

    if let Some(class) = config.class_name() {
        doc = doc.set("class", class);
    }

    doc.add(tree.to_svg(label_font_size))
}

#[cfg(test)]
mod tests {
    use parterre_core::geometry::{Point, Size};

    use crate::tree::{Group, Shape, ShapeKind};

    use super::*;

    fn simple_tree() -> Node {
        Node::Group(Group::new().add(Node::Shape(Shape::new(ShapeKind::Rect {
            origin: Point::default(),
            size: Size::new(10.0, 10.0),
            corner_radius: 0.0,
        }))))
    }

    #[test]
    fn test_document_viewbox_and_root_attributes() {
        let tree = simple_tree();
        let bounds = Bounds::from_origin_size(Point::new(-1.0, -2.0), Size::new(12.0, 14.0));
        let doc = render_document(&tree, bounds, 6.0, &RenderConfig::default());
        let markup = doc.to_string();

        assert!(markup.contains("viewBox=\"-1 -2 12 14\""));
        assert!(markup.contains("role=\"group\""));
        assert!(markup.contains("aria-label=\"Seat map\""));
        assert!(!markup.contains("class="));
    }

    #[test]
    fn test_document_custom_config() {
        let tree = simple_tree();
        let config = RenderConfig::new(Some("venue".to_string()), "Main hall");
        let doc = render_document(&tree, Bounds::default(), 6.0, &config);
        let markup = doc.to_string();

        assert!(markup.contains("viewBox=\"0 0 0 0\""));
        assert!(markup.contains("aria-label=\"Main hall\""));
        assert!(markup.contains("class=\"venue\""));
    }
}
