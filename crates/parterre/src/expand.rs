//! Declarative layout expansion.
//!
//! The single entry point that turns a [`SeatmapLayoutData`] tree into
//! the visual tree, applying the display rules:
//!
//! - Non-text decorations render beneath the addressable tree, text
//!   decorations above it, preserving relative order within each group.
//! - Within a row, only the first and last seat show their names.
//! - `showLabels` selects which label slots receive the row name.
//! - A volume's available-seat count shows as a badge, except on big
//!   ellipses where it is folded into the text label.
//! - Disabled seats and volumes render with a fixed muted fill,
//!   overriding both caller color and active state.
//! - Every seat and volume carries bookable metadata for click dispatch;
//!   the expander never withholds it based on disabled state.
//!
//! Malformed input (negative dimensions, duplicate ids) is not validated
//! here; the only failure is requesting rotation without dimensions.

use log::{debug, info, warn};

use parterre_core::{
    color::Color,
    ellipse,
    geometry::{Point, Size},
    text,
    transform::{GeometryError, Transform},
    units::{point_to_render_units, to_render_units},
};

use crate::{
    data::{
        AreaData, BadgeContainer, BlockData, Decoration, RowData, SeatData, SeatShape,
        SeatmapLayoutData, VolumeData, VolumeShape,
    },
    text_size::{TextSize, TextSizeRegistry},
    tree::{
        Bookable, BookableKind, FontSize, Group, LayeredChildren, Node, RenderLayer, Role, Shape,
        ShapeKind, TextAnchor, TextNode,
    },
};

/// Ellipse volumes at least this wide fold the seat count into the
/// label instead of showing a badge, which would look disproportionate.
pub const BIG_ELLIPSE_MIN_WIDTH: f32 = 1000.0;

const DISABLED_FILL: &str = "#808080";
const DISABLED_BADGE_FILL: &str = "#cccccc";
const DEFAULT_VOLUME_FILL: &str = "#808080";
const DEFAULT_BADGE_FILL: &str = "#808080";

// Seat cells are 10 render units apart; the 9.5-unit body leaves room
// for the stroke.
const SEAT_BODY_SIZE: f32 = 9.5;
const SEAT_INSET: f32 = 2.5; // seatmap units
const SEAT_CENTER: f32 = 5.0; // render units
const SEAT_CIRCLE_RADIUS: f32 = 4.75;

const SCRIM_HEIGHT: f32 = 10.0;
const SCRIM_HORIZONTAL_PADDING: f32 = 3.0;
const SCRIM_OPACITY: f32 = 0.54;
const VOLUME_LABEL_FONT_SIZE: f32 = 6.0;

// Badge radius is fixed; the font size would also have to change with it.
const BADGE_RADIUS: f32 = 5.0;
const BADGE_HORIZONTAL_PADDING: f32 = 7.0;
const BADGE_VERTICAL_PADDING: f32 = 3.0;
const BADGE_OVERLAY_OPACITY: f32 = 0.35;
const BADGE_FONT_SIZE: f32 = 5.0;

const ROW_LABEL_LEFT_X: f32 = -5.0;
const ROW_LABEL_RIGHT_X: f32 = 15.0;
const ROW_LABEL_Y: f32 = 5.0;

const DECORATION_FONT_SIZE: f32 = 10.0;

/// Expands a layout data tree into the visual tree.
///
/// Label-bearing elements register their intrinsic text-size need in
/// `text_sizes` as they are expanded.
///
/// # Errors
///
/// [`GeometryError::MissingDimensions`] when any element requests
/// rotation without both dimensions; the offending element never renders.
pub fn expand(
    data: &SeatmapLayoutData,
    text_sizes: &mut TextSizeRegistry,
) -> Result<Node, GeometryError> {
    info!(
        areas = data.areas.len(),
        decorations = data.decorations.len();
        "Expanding seatmap layout"
    );

    let mut layered = LayeredChildren::new();
    for decoration in &data.decorations {
        let layer = if decoration.is_text() {
            RenderLayer::Foreground
        } else {
            RenderLayer::Background
        };
        layered.add_to_layer(layer, expand_decoration(decoration)?);
    }
    for area in &data.areas {
        layered.add_to_layer(RenderLayer::Content, expand_area(area, text_sizes)?);
    }

    debug!("Seatmap layout expanded");
    Ok(Node::Group(
        Group::new().with_children(layered.into_ordered()),
    ))
}

fn expand_decoration(decoration: &Decoration) -> Result<Node, GeometryError> {
    let node = match decoration {
        Decoration::Circle {
            center_x,
            center_y,
            radius,
            color,
        } => Node::Shape(
            Shape::new(ShapeKind::Circle {
                center: Point::new(to_render_units(*center_x), to_render_units(*center_y)),
                radius: to_render_units(*radius),
            })
            .with_optional_fill(parse_fill(color.as_deref()))
            .with_aria_hidden(),
        ),
        Decoration::Ellipse {
            x,
            y,
            width,
            height,
            color,
        } => Node::Shape(
            Shape::new(ellipse_kind(*width, *height))
                .with_transform(Transform::for_element(
                    *x,
                    *y,
                    0.0,
                    Some(*width),
                    Some(*height),
                )?)
                .with_optional_fill(parse_fill(color.as_deref()))
                .with_aria_hidden(),
        ),
        Decoration::Rectangle {
            x,
            y,
            width,
            height,
            angle,
            color,
        } => Node::Shape(
            Shape::new(ShapeKind::Rect {
                origin: Point::default(),
                size: Size::new(to_render_units(*width), to_render_units(*height)),
                corner_radius: 0.0,
            })
            .with_transform(Transform::for_element(
                *x,
                *y,
                *angle,
                Some(*width),
                Some(*height),
            )?)
            .with_optional_fill(parse_fill(color.as_deref()))
            .with_aria_hidden(),
        ),
        Decoration::Text { text, x, y, angle } => {
            // The anchor sits one line below the given position; text
            // decorations may rotate around it, so zero dimensions are
            // passed explicitly.
            let offset_y = y + DECORATION_FONT_SIZE * 10.0;
            Node::Text(
                TextNode::new(
                    text.clone(),
                    Point::default(),
                    FontSize::Fixed(DECORATION_FONT_SIZE),
                )
                .with_anchor(TextAnchor::Start)
                .with_transform(Transform::for_element(
                    *x,
                    offset_y,
                    *angle,
                    Some(0.0),
                    Some(0.0),
                )?)
                .with_aria_hidden(),
            )
        }
    };
    Ok(node)
}

fn expand_area(
    area: &AreaData,
    text_sizes: &mut TextSizeRegistry,
) -> Result<Node, GeometryError> {
    let mut group = Group::new().with_transform(Transform::for_element(
        area.x,
        area.y,
        area.angle,
        area.width,
        area.height,
    )?);
    if let Some(name) = &area.name {
        group = group.with_role(Role::Group).with_aria_label(name.clone());
    }
    for block in &area.blocks {
        group = group.add(expand_block(block, text_sizes)?);
    }
    for volume in &area.volumes {
        group = group.add(expand_volume(volume)?);
    }
    Ok(Node::Group(group))
}

fn expand_block(
    block: &BlockData,
    text_sizes: &mut TextSizeRegistry,
) -> Result<Node, GeometryError> {
    let mut group = Group::new().with_transform(Transform::for_element(
        block.x,
        block.y,
        block.angle,
        block.width,
        block.height,
    )?);
    for row in &block.rows {
        group = group.add(expand_row(row, text_sizes));
    }
    Ok(Node::Group(group))
}

fn expand_row(row: &RowData, text_sizes: &mut TextSizeRegistry) -> Node {
    let mut group = Group::new().with_transform(Transform::translation(row.x, row.y));
    if let Some(name) = &row.name {
        group = group.with_role(Role::Group).with_aria_label(name.clone());
    }

    if let Some(name) = &row.name {
        if row.show_labels.shows_left() {
            group = group.add(row_label(
                name,
                ROW_LABEL_LEFT_X,
                row.seats.first(),
                text_sizes,
            ));
        }
    }

    let last_index = row.seats.len().saturating_sub(1);
    for (index, seat) in row.seats.iter().enumerate() {
        let hide_name = index != 0 && index != last_index;
        group = group.add(expand_seat(seat, hide_name, text_sizes));
    }

    if let Some(name) = &row.name {
        if row.show_labels.shows_right() {
            group = group.add(row_label(
                name,
                ROW_LABEL_RIGHT_X,
                row.seats.last(),
                text_sizes,
            ));
        }
    }

    Node::Group(group)
}

/// Derives the left and right label offsets from the row's end seats,
/// in render units. An empty seat sequence yields zero offsets.
pub fn row_label_offsets(seats: &[SeatData]) -> (Point, Point) {
    match (seats.first(), seats.last()) {
        (Some(first), Some(last)) => (
            point_to_render_units(Point::new(first.x, first.y)),
            point_to_render_units(Point::new(last.x, last.y)),
        ),
        _ => (Point::default(), Point::default()),
    }
}

fn row_label(
    name: &str,
    anchor_x: f32,
    end_seat: Option<&SeatData>,
    text_sizes: &mut TextSizeRegistry,
) -> Node {
    text_sizes.register(TextSize::intrinsic_for(name));
    // The label follows its end seat; no transform when the seat sits at
    // the row origin.
    let transform = end_seat.and_then(|seat| Transform::translation(seat.x, seat.y));
    Node::Text(
        TextNode::new(
            name,
            Point::new(anchor_x, ROW_LABEL_Y),
            FontSize::Responsive,
        )
        .with_transform(transform)
        .with_class("parterre-row__label"),
    )
}

fn expand_seat(seat: &SeatData, hide_name: bool, text_sizes: &mut TextSizeRegistry) -> Node {
    let fill = if seat.disabled {
        Some(fixed_fill(DISABLED_FILL))
    } else {
        parse_fill(seat.color.as_deref())
    };

    let body = match seat.shape {
        SeatShape::Square => Shape::new(ShapeKind::Rect {
            origin: Point::default(),
            size: Size::new(SEAT_BODY_SIZE, SEAT_BODY_SIZE),
            corner_radius: 0.0,
        })
        .with_transform(Transform::translation(
            seat.x + SEAT_INSET,
            seat.y + SEAT_INSET,
        )),
        SeatShape::Circle => Shape::new(ShapeKind::Circle {
            center: Point::new(SEAT_CENTER, SEAT_CENTER),
            radius: SEAT_CIRCLE_RADIUS,
        })
        .with_transform(Transform::translation(seat.x, seat.y)),
    }
    .with_optional_fill(fill)
    .with_class("shape");

    let mut classes: Vec<&str> = Vec::new();
    if hide_name {
        classes.push("name-hidden");
    }
    if !seat.disabled {
        classes.push("clickable");
    }
    if seat.active {
        classes.push("active");
    }

    let mut group = Group::new()
        .with_role(Role::Button)
        .with_bookable(Bookable::new(
            seat.id.clone(),
            BookableKind::Seat,
            seat.disabled,
            seat.active,
        ));
    if !classes.is_empty() {
        group = group.with_class(classes.join(" "));
    }
    group = group.add(Node::Shape(body));

    if let Some(name) = &seat.name {
        group = group.with_aria_label(name.clone());
        text_sizes.register(TextSize::intrinsic_for(name));
        group = group.add(Node::Text(
            TextNode::new(
                name,
                Point::new(SEAT_CENTER, SEAT_CENTER),
                FontSize::Responsive,
            )
            .with_transform(Transform::translation(seat.x, seat.y))
            .with_class("parterre-seat__name")
            .with_hidden(hide_name),
        ));
    }

    Node::Group(group)
}

/// Whether the volume's seat count displays as a badge. Rectangles
/// always badge; ellipses only below the big-ellipse width.
fn shows_badge(volume: &VolumeData) -> bool {
    match volume.shape {
        VolumeShape::Rectangle => true,
        VolumeShape::Ellipse => volume.width < BIG_ELLIPSE_MIN_WIDTH,
    }
}

/// The label a volume displays: its own label as-is when the count shows
/// as a badge (or there is no count), otherwise the label with the count
/// folded in.
fn display_label(volume: &VolumeData) -> Option<String> {
    let Some(count) = volume.available_seats else {
        return volume.label.clone();
    };
    if shows_badge(volume) {
        return volume.label.clone();
    }
    Some(match &volume.label {
        Some(label) => format!("{label} ({count})"),
        None => count.to_string(),
    })
}

fn ellipse_kind(width: f32, height: f32) -> ShapeKind {
    let radii = Size::new(to_render_units(width / 2.0), to_render_units(height / 2.0));
    ShapeKind::Ellipse {
        center: Point::new(radii.width(), radii.height()),
        radii,
    }
}

fn expand_volume(volume: &VolumeData) -> Result<Node, GeometryError> {
    let transform = Transform::for_element(
        volume.x,
        volume.y,
        volume.angle,
        Some(volume.width),
        Some(volume.height),
    )?;

    let fill = if volume.disabled {
        fixed_fill(DISABLED_FILL)
    } else {
        parse_fill(volume.color.as_deref()).unwrap_or_else(|| fixed_fill(DEFAULT_VOLUME_FILL))
    };

    let body = match volume.shape {
        VolumeShape::Rectangle => Shape::new(ShapeKind::Rect {
            origin: Point::default(),
            size: Size::new(to_render_units(volume.width), to_render_units(volume.height)),
            corner_radius: 2.0,
        }),
        VolumeShape::Ellipse => Shape::new(ellipse_kind(volume.width, volume.height)),
    }
    .with_fill(fill)
    .with_class("shape");

    let label = display_label(volume);

    let mut classes: Vec<&str> = Vec::new();
    if !volume.disabled {
        classes.push("clickable");
    }
    if volume.active {
        classes.push("active");
    }

    let mut group = Group::new()
        .with_transform(transform)
        .with_role(Role::Button)
        .with_aria_label(label.clone().unwrap_or_else(|| "Volume".to_string()))
        .with_bookable(Bookable::new(
            volume.id.clone(),
            BookableKind::Volume,
            volume.disabled,
            volume.active,
        ));
    if !classes.is_empty() {
        group = group.with_class(classes.join(" "));
    }
    group = group.add(Node::Shape(body));

    if let Some(label) = &label {
        for node in volume_scrim(volume, label) {
            group = group.add(node);
        }
    }

    if let Some(count) = volume.available_seats {
        if shows_badge(volume) {
            let container = BadgeContainer::from_dimensions(volume.width, volume.height);
            let anchor = match volume.shape {
                VolumeShape::Rectangle => rectangle_badge_anchor(&container),
                VolumeShape::Ellipse => ellipse_badge_anchor(&container),
            };
            let color = if volume.disabled {
                fixed_fill(DISABLED_BADGE_FILL)
            } else {
                parse_fill(volume.color.as_deref())
                    .unwrap_or_else(|| fixed_fill(DEFAULT_BADGE_FILL))
            };
            for node in badge(anchor, count, color) {
                group = group.add(node);
            }
        }
    }

    Ok(Node::Group(group))
}

/// A semi-opaque backing rectangle with the label text on top, improving
/// contrast against the volume fill.
fn volume_scrim(volume: &VolumeData, label: &str) -> Vec<Node> {
    let scrim_fill = fixed_fill("white").with_alpha(SCRIM_OPACITY);
    match volume.shape {
        VolumeShape::Rectangle => {
            // Anchored bottom-left, spanning the full volume width.
            let width = to_render_units(volume.width);
            let top = to_render_units(volume.height) - SCRIM_HEIGHT;
            vec![
                Node::Shape(
                    Shape::new(ShapeKind::Rect {
                        origin: Point::new(0.0, top),
                        size: Size::new(width, SCRIM_HEIGHT),
                        corner_radius: 0.0,
                    })
                    .with_fill(scrim_fill)
                    .with_class("parterre-scrim")
                    .with_aria_hidden(),
                ),
                Node::Text(
                    TextNode::new(
                        label,
                        Point::new(SCRIM_HORIZONTAL_PADDING, top + SCRIM_HEIGHT / 2.0),
                        FontSize::Fixed(VOLUME_LABEL_FONT_SIZE),
                    )
                    .with_anchor(TextAnchor::Start)
                    .with_class("parterre-volume__label"),
                ),
            ]
        }
        VolumeShape::Ellipse => {
            // Centered on the ellipse; the scrim hugs the measured text.
            let center = Point::new(
                to_render_units(volume.width / 2.0),
                to_render_units(volume.height / 2.0),
            );
            let text_width = text::measure(label, VOLUME_LABEL_FONT_SIZE).width();
            let scrim_width = text_width + SCRIM_HORIZONTAL_PADDING * 2.0;
            vec![
                Node::Shape(
                    Shape::new(ShapeKind::Rect {
                        origin: Point::new(
                            center.x() - scrim_width / 2.0,
                            center.y() - SCRIM_HEIGHT / 2.0,
                        ),
                        size: Size::new(scrim_width, SCRIM_HEIGHT),
                        corner_radius: 0.0,
                    })
                    .with_fill(scrim_fill)
                    .with_class("parterre-scrim")
                    .with_aria_hidden(),
                ),
                Node::Text(
                    TextNode::new(label, center, FontSize::Fixed(VOLUME_LABEL_FONT_SIZE))
                        .with_class("parterre-volume__label"),
                ),
            ]
        }
    }
}

/// Badge anchor at the inner-right edge of a rectangular container.
fn rectangle_badge_anchor(container: &BadgeContainer) -> Point {
    Point::new(
        to_render_units(container.dimensions().width()) - BADGE_HORIZONTAL_PADDING,
        BADGE_VERTICAL_PADDING,
    )
}

/// Badge anchor on the boundary of an elliptical container.
fn ellipse_badge_anchor(container: &BadgeContainer) -> Point {
    point_to_render_units(ellipse::badge_anchor(
        Point::default(),
        container.dimensions(),
    ))
}

/// A circular count badge: filled circle, semi-transparent overlay, and
/// the centered count. All parts are hidden from assistive technology;
/// the count is conveyed through the owning volume's label when needed.
fn badge(anchor: Point, count: u32, color: Color) -> Vec<Node> {
    vec![
        Node::Shape(
            Shape::new(ShapeKind::Circle {
                center: anchor,
                radius: BADGE_RADIUS,
            })
            .with_fill(color)
            .with_class("parterre-badge__circle")
            .with_aria_hidden(),
        ),
        Node::Shape(
            Shape::new(ShapeKind::Circle {
                center: anchor,
                radius: BADGE_RADIUS,
            })
            .with_fill(fixed_fill("white").with_alpha(BADGE_OVERLAY_OPACITY))
            .with_class("parterre-badge__text-overlay-circle")
            .with_aria_hidden(),
        ),
        Node::Text(
            TextNode::new(count.to_string(), anchor, FontSize::Fixed(BADGE_FONT_SIZE))
                .with_class("parterre-badge__name")
                .with_aria_hidden(),
        ),
    ]
}

fn parse_fill(color: Option<&str>) -> Option<Color> {
    let value = color?;
    match Color::new(value) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(color = value; "Ignoring unparseable fill color: {err}");
            None
        }
    }
}

fn fixed_fill(value: &str) -> Color {
    Color::new(value).expect("palette colors are valid CSS colors")
}
