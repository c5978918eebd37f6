//! The visual tree emitted by the layout expander.
//!
//! The tree is an explicit, inspectable value: nested groups carrying
//! transforms and accessibility attributes, shape primitives carrying
//! fills, and text nodes carrying font sizing. The host renders it to
//! SVG, computes content bounds over it, and dispatches interactions
//! against the bookable metadata it carries.

use std::fmt;

use svg::node::element as svg_element;

use parterre_core::{
    color::Color,
    geometry::{Point, Size},
    transform::Transform,
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Z-order layers for the root's children.
///
/// Layers render from bottom to top in declaration order: non-text
/// decorations first, then the addressable tree, then text decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Non-text decorations (background shapes).
    Background,
    /// Areas with their blocks, rows, seats, and volumes.
    Content,
    /// Text decorations, always on top.
    Foreground,
}

/// Collects nodes by layer, preserving relative order within each layer.
#[derive(Debug, Default)]
pub struct LayeredChildren {
    items: Vec<(RenderLayer, Node)>,
}

impl LayeredChildren {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: Node) {
        self.items.push((layer, node));
    }

    /// Consumes the collection, returning all nodes in layer order.
    /// The sort is stable, so relative order within a layer is preserved.
    pub fn into_ordered(mut self) -> Vec<Node> {
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items.into_iter().map(|(_, node)| node).collect()
    }
}

/// Whether a bookable is a seat or a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookableKind {
    Seat,
    Volume,
}

impl fmt::Display for BookableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seat => write!(f, "seat"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

/// Interaction metadata carried by a seat or volume group.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookable {
    id: String,
    kind: BookableKind,
    disabled: bool,
    active: bool,
}

impl Bookable {
    pub fn new(id: impl Into<String>, kind: BookableKind, disabled: bool, active: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            disabled,
            active,
        }
    }

    /// The caller-supplied identifier reported in click events.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> BookableKind {
        self.kind
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Disabled bookables are excluded from the tab order.
    pub fn tab_index(&self) -> i32 {
        if self.disabled { -1 } else { 0 }
    }
}

/// ARIA role carried by a group node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Group,
    Button,
}

impl Role {
    fn name(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Button => "button",
        }
    }
}

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Shape(Shape),
    Text(TextNode),
}

impl Node {
    /// Renders this node and its subtree to an SVG node.
    ///
    /// `label_font_size` resolves [`FontSize::Responsive`] text, which is
    /// coordinated across the whole tree by the text-size registry.
    pub fn to_svg(&self, label_font_size: f32) -> SvgNode {
        match self {
            Self::Group(group) => group.to_svg(label_font_size),
            Self::Shape(shape) => shape.to_svg(),
            Self::Text(text) => text.to_svg(label_font_size),
        }
    }

    /// Finds the bookable with the given id in this subtree.
    pub fn find_bookable(&self, id: &str) -> Option<&Bookable> {
        match self {
            Self::Group(group) => {
                if let Some(bookable) = group.bookable() {
                    if bookable.id() == id {
                        return Some(bookable);
                    }
                }
                group
                    .children()
                    .iter()
                    .find_map(|child| child.find_bookable(id))
            }
            Self::Shape(_) | Self::Text(_) => None,
        }
    }
}

/// A group of child nodes, optionally transformed and carrying
/// accessibility attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    transform: Option<Transform>,
    role: Option<Role>,
    aria_label: Option<String>,
    class: Option<String>,
    bookable: Option<Bookable>,
    children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transform for this group (builder style).
    pub fn with_transform(mut self, transform: Option<Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Attaches bookable metadata. Bookable groups render with
    /// `role="button"`, a tab index, and pressed/disabled states.
    pub fn with_bookable(mut self, bookable: Bookable) -> Self {
        self.bookable = Some(bookable);
        self
    }

    pub fn add(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn bookable(&self) -> Option<&Bookable> {
        self.bookable.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn to_svg(&self, label_font_size: f32) -> SvgNode {
        let mut group = svg_element::Group::new();
        if let Some(transform) = &self.transform {
            group = group.set("transform", transform.to_string());
        }
        if let Some(class) = &self.class {
            group = group.set("class", class.as_str());
        }
        if let Some(role) = self.role {
            group = group.set("role", role.name());
        }
        if let Some(label) = &self.aria_label {
            group = group.set("aria-label", label.as_str());
        }
        if let Some(bookable) = &self.bookable {
            group = group
                .set("tabindex", bookable.tab_index())
                .set("aria-pressed", bookable.active().to_string());
            if bookable.disabled() {
                group = group.set("aria-disabled", "true");
            }
        }
        for child in &self.children {
            group = group.add(child.to_svg(label_font_size));
        }
        Box::new(group)
    }
}

/// The geometry of a shape primitive, in render units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rect {
        origin: Point,
        size: Size,
        corner_radius: f32,
    },
    Circle {
        center: Point,
        radius: f32,
    },
    Ellipse {
        center: Point,
        radii: Size,
    },
}

/// A filled shape primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    transform: Option<Transform>,
    fill: Option<Color>,
    class: Option<String>,
    aria_hidden: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            transform: None,
            fill: None,
            class: None,
            aria_hidden: false,
        }
    }

    pub fn with_transform(mut self, transform: Option<Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_optional_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Marks this shape as purely decorative for assistive technology.
    pub fn with_aria_hidden(mut self) -> Self {
        self.aria_hidden = true;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn fill(&self) -> Option<&Color> {
        self.fill.as_ref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    fn to_svg(&self) -> SvgNode {
        match self.kind {
            ShapeKind::Rect {
                origin,
                size,
                corner_radius,
            } => {
                let mut rect = svg_element::Rectangle::new()
                    .set("width", size.width())
                    .set("height", size.height());
                if !origin.is_zero() {
                    rect = rect.set("x", origin.x()).set("y", origin.y());
                }
                if corner_radius > 0.0 {
                    rect = rect.set("rx", corner_radius).set("ry", corner_radius);
                }
                self.finish_svg(rect)
            }
            ShapeKind::Circle { center, radius } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius);
                self.finish_svg(circle)
            }
            ShapeKind::Ellipse { center, radii } => {
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("rx", radii.width())
                    .set("ry", radii.height());
                self.finish_svg(ellipse)
            }
        }
    }

    fn finish_svg<E>(&self, mut element: E) -> SvgNode
    where
        E: svg::Node,
    {
        if let Some(fill) = &self.fill {
            element.assign("fill", fill);
            if fill.alpha() < 1.0 {
                element.assign("fill-opacity", fill.alpha());
            }
        }
        if let Some(transform) = &self.transform {
            element.assign("transform", transform.to_string());
        }
        if let Some(class) = &self.class {
            element.assign("class", class.as_str());
        }
        if self.aria_hidden {
            element.assign("aria-hidden", "true");
        }
        Box::new(element)
    }
}

/// Horizontal anchoring of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Font sizing of a text node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// A fixed size in render units.
    Fixed(f32),
    /// Participates in the shared text-size coordination; resolved at
    /// render time from the registry's effective size.
    Responsive,
}

/// A text node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    content: String,
    position: Point,
    font_size: FontSize,
    anchor: TextAnchor,
    transform: Option<Transform>,
    class: Option<String>,
    hidden: bool,
    aria_hidden: bool,
}

impl TextNode {
    pub fn new(content: impl Into<String>, position: Point, font_size: FontSize) -> Self {
        Self {
            content: content.into(),
            position,
            font_size,
            anchor: TextAnchor::Middle,
            transform: None,
            class: None,
            hidden: false,
            aria_hidden: false,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_transform(mut self, transform: Option<Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Hides the text while keeping it in the tree. Hidden text
    /// contributes nothing to content bounds.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_aria_hidden(mut self) -> Self {
        self.aria_hidden = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    /// Resolves the font size against the tree-wide label size.
    pub fn resolved_font_size(&self, label_font_size: f32) -> f32 {
        match self.font_size {
            FontSize::Fixed(size) => size,
            FontSize::Responsive => label_font_size,
        }
    }

    fn to_svg(&self, label_font_size: f32) -> SvgNode {
        let mut text = svg_element::Text::new(&self.content)
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-size", self.resolved_font_size(label_font_size));
        if self.anchor == TextAnchor::Middle {
            text = text
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central");
        }
        if let Some(transform) = &self.transform {
            text = text.set("transform", transform.to_string());
        }
        if let Some(class) = &self.class {
            text = text.set("class", class.as_str());
        }
        if self.hidden {
            text = text.set("display", "none");
        }
        if self.aria_hidden {
            text = text.set("aria-hidden", "true");
        }
        Box::new(text)
    }
}
