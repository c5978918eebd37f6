//! Parterre - A data-driven renderer for interactive SVG seatmaps.
//!
//! A declarative [`data::SeatmapLayoutData`] tree (areas containing
//! blocks of seat rows and general-admission volumes, plus decorations)
//! is expanded into an explicit visual tree and rendered to SVG markup.
//! The emitted tree carries computed transforms, fills, accessibility
//! attributes, and the bookable metadata used to dispatch click events.

pub mod bounds;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod expand;
pub mod text_size;
pub mod tree;

mod error;
mod export;

pub use error::SeatmapError;

pub use parterre_core::{color, ellipse, geometry, transform, units};

use log::{debug, info};

use bounds::ContentBoundsTracker;
use config::RenderConfig;
use data::SeatmapLayoutData;
use dispatch::{BookableClickEvent, Interaction};
use geometry::Bounds;
use text_size::{TextSize, TextSizeRegistry};
use tree::Node;

/// Builder for rendering seatmap layouts.
///
/// # Examples
///
/// ```rust
/// use parterre::{SeatmapBuilder, config::RenderConfig, data::SeatmapLayoutData};
///
/// let data: SeatmapLayoutData = serde_json::from_str(
///     r#"{"areas": [{"blocks": [{"rows": [{"seats": [{"id": "A1", "name": "1"}]}]}]}]}"#,
/// )
/// .unwrap();
///
/// let builder = SeatmapBuilder::new(RenderConfig::default());
/// let rendered = builder.render(&data).expect("Failed to render");
/// let svg = rendered.to_svg_string();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct SeatmapBuilder {
    config: RenderConfig,
}

impl SeatmapBuilder {
    /// Create a new builder with the given rendering configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Expand a layout data tree into a rendered seatmap.
    ///
    /// Expansion populates the text-size registry from every
    /// label-bearing element and primes the content bounds tracker with
    /// the freshly built tree.
    ///
    /// # Errors
    ///
    /// Returns [`SeatmapError::InvalidConfiguration`] when the data
    /// requests rotation without both dimensions.
    pub fn render(&self, data: &SeatmapLayoutData) -> Result<RenderedSeatmap, SeatmapError> {
        info!("Rendering seatmap");

        let mut text_sizes = TextSizeRegistry::new();
        let tree = expand::expand(data, &mut text_sizes)?;

        let mut bounds = ContentBoundsTracker::new();
        bounds.refresh(&tree, text_sizes.effective().font_size());

        debug!(
            effective_text_size:? = text_sizes.effective(),
            width = bounds.view_box().width(),
            height = bounds.view_box().height();
            "Seatmap rendered"
        );

        Ok(RenderedSeatmap {
            tree,
            text_sizes,
            bounds,
            config: self.config.clone(),
        })
    }
}

/// A rendered seatmap: the visual tree together with the state owned by
/// the mounted root — the text-size registry and the content bounds
/// tracker. Both live exactly as long as this value.
#[derive(Debug)]
pub struct RenderedSeatmap {
    tree: Node,
    text_sizes: TextSizeRegistry,
    bounds: ContentBoundsTracker,
    config: RenderConfig,
}

impl RenderedSeatmap {
    /// Returns the expanded visual tree.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Returns the current viewbox bounds.
    pub fn view_box(&self) -> Bounds {
        self.bounds.view_box()
    }

    /// Returns the effective text size shared by all responsive labels.
    pub fn effective_text_size(&self) -> TextSize {
        self.text_sizes.effective()
    }

    /// Returns the text-size registry for host-driven register and
    /// unregister calls.
    pub fn text_sizes_mut(&mut self) -> &mut TextSizeRegistry {
        &mut self.text_sizes
    }

    /// Recomputes the content bounds against the current tree.
    ///
    /// The host calls this after mutating the tree. Returns the new
    /// bounds when they changed, `None` when the box is unchanged.
    pub fn refresh_bounds(&mut self) -> Option<Bounds> {
        self.bounds
            .refresh(&self.tree, self.text_sizes.effective().font_size())
    }

    /// Dispatches an interaction against the bookable with the given id.
    ///
    /// Returns the uniform click event, which fires for disabled
    /// bookables too, or `None` when the id is unknown or the
    /// interaction does not activate.
    pub fn dispatch(&self, id: &str, interaction: Interaction) -> Option<BookableClickEvent> {
        let bookable = self.tree.find_bookable(id)?;
        dispatch::dispatch(bookable, interaction)
    }

    /// Renders the seatmap to an SVG document.
    pub fn to_svg_document(&self) -> svg::Document {
        export::render_document(
            &self.tree,
            self.view_box(),
            self.text_sizes.effective().font_size(),
            &self.config,
        )
    }

    /// Renders the seatmap to an SVG string.
    pub fn to_svg_string(&self) -> String {
        self.to_svg_document().to_string()
    }
}
