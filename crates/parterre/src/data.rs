//! The declarative seatmap data model.
//!
//! A [`SeatmapLayoutData`] tree describes an entire seatmap: areas
//! containing blocks of seat rows and general-admission volumes, plus
//! decorative shapes. All positions and lengths are in seatmap units
//! (10 seatmap units = 1 render unit) and are caller-supplied; this
//! engine performs no layout solving and no validation of identifier
//! uniqueness.
//!
//! The wire format is camelCase; every optional field has a documented
//! default, so partial data is always legal input.

use serde::Deserialize;

use parterre_core::geometry::Size;

/// Shape of an individual seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatShape {
    #[default]
    Square,
    Circle,
}

/// Shape of a general-admission volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeShape {
    #[default]
    Rectangle,
    Ellipse,
}

/// Where to display a row's name as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLabelMode {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl RowLabelMode {
    /// Returns true when the left label slot receives the row name.
    pub fn shows_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    /// Returns true when the right label slot receives the row name.
    pub fn shows_right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}

/// Data for an individual seat.
///
/// The `id` is opaque and passed through to click events; uniqueness
/// within area and row is a caller contract.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatData {
    pub id: String,
    /// Display name shown inside the seat.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub shape: SeatShape,
    /// Fill color. Ignored when `disabled` is true.
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the seat is currently selected.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Data for a row of seats.
///
/// Seat order matters: the first and last seat drive the row label
/// offsets, and only the first and last seat show their names.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Row name, used for accessibility and as label text.
    #[serde(default)]
    pub name: Option<String>,
    /// Where to show the row name as a label.
    #[serde(default)]
    pub show_labels: RowLabelMode,
    pub seats: Vec<SeatData>,
}

/// Data for a block containing rows. Pure grouping/positioning container
/// with no ticketing identity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Width in seatmap units. Required when using `angle`.
    #[serde(default)]
    pub width: Option<f32>,
    /// Height in seatmap units. Required when using `angle`.
    #[serde(default)]
    pub height: Option<f32>,
    /// Rotation angle in degrees, clockwise.
    #[serde(default)]
    pub angle: f32,
    pub rows: Vec<RowData>,
}

/// Data for a general-admission volume.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeData {
    pub id: String,
    /// Base label displayed on the volume (e.g. "Table 1").
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub shape: VolumeShape,
    /// Fill color. Ignored when `disabled` is true.
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the volume is currently selected.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Rotation angle in degrees, clockwise.
    #[serde(default)]
    pub angle: f32,
    /// Number of available seats. When provided, determines how the
    /// count is displayed (badge or label suffix).
    #[serde(default)]
    pub available_seats: Option<u32>,
}

/// Data for an area containing blocks and volumes.
///
/// The area defines the naming scope: area + row + seat and
/// area + volume label must be unique by external convention.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaData {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Width in seatmap units. Required when using `angle`.
    #[serde(default)]
    pub width: Option<f32>,
    /// Height in seatmap units. Required when using `angle`.
    #[serde(default)]
    pub height: Option<f32>,
    /// Rotation angle in degrees, clockwise.
    #[serde(default)]
    pub angle: f32,
    /// Accessible name for the area.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub blocks: Vec<BlockData>,
    #[serde(default)]
    pub volumes: Vec<VolumeData>,
}

/// A decorative element, rendered beneath or above the addressable tree
/// depending on its type: text decorations render last (on top), all
/// other decorations render first (beneath).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Decoration {
    #[serde(rename_all = "camelCase")]
    Circle {
        #[serde(default)]
        center_x: f32,
        #[serde(default)]
        center_y: f32,
        radius: f32,
        #[serde(default)]
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Ellipse {
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        width: f32,
        height: f32,
        #[serde(default)]
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Rectangle {
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        width: f32,
        height: f32,
        #[serde(default)]
        angle: f32,
        #[serde(default)]
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        angle: f32,
    },
}

impl Decoration {
    /// Returns true for text decorations, which render above the
    /// addressable tree.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// Complete data structure describing an entire seatmap.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatmapLayoutData {
    pub areas: Vec<AreaData>,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

/// The container a seat-count badge is placed against.
///
/// Two constructors cover the historical input shapes: the legacy
/// width-only form and the full dimensions form. Both normalize to a
/// single [`Size`] before any geometry function runs; only boundary
/// code should construct the legacy form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeContainer {
    dimensions: Size,
}

impl BadgeContainer {
    /// Creates a container from explicit dimensions in seatmap units.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self {
            dimensions: Size::new(width, height),
        }
    }

    /// Creates a container from a width only (legacy input shape).
    /// The container is assumed square.
    pub fn from_width(width: f32) -> Self {
        Self {
            dimensions: Size::new(width, width),
        }
    }

    /// Returns the normalized container dimensions in seatmap units.
    pub fn dimensions(&self) -> Size {
        self.dimensions
    }
}
