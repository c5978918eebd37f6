//! Error types for seatmap rendering.
//!
//! This module provides the main error type [`SeatmapError`] wrapping the
//! error conditions that can occur while expanding and rendering a layout.

use thiserror::Error;

use parterre_core::transform::GeometryError;

/// The main error type for seatmap rendering operations.
///
/// Configuration errors are local and immediate: they are raised at the
/// smallest offending element while the layout is expanded, and that
/// element never renders. Degenerate geometry (zero-size shapes, empty
/// trees) is not an error; it produces well-defined degenerate output.
#[derive(Debug, Error)]
pub enum SeatmapError {
    /// The input data requested geometry that cannot be computed, e.g.
    /// rotation without both dimensions.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] GeometryError),
}
