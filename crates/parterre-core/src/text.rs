//! Text measurement for scrim sizing and content bounds.
//!
//! Scrim widths and text bounds depend on the rendered extent of label
//! text. Measurement goes through a process-wide [`TextMeasurer`] holding
//! a reusable `FontSystem`, which is expensive to create.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use std::sync::{Arc, Mutex};

use crate::geometry::Size;

const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Measures text extents using real font metrics and shaping.
struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the actual size of text in render units using cosmic-text.
    fn measure(&self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().unwrap();

        let line_height = font_size * 1.15;
        let metrics = Metrics::new(font_size, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(DEFAULT_FONT_FAMILY));

        // Unbounded buffer so the text flows naturally on a single line
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // Fallback estimate if no runs are available
            max_width = text.len() as f32 * (font_size * 0.55);
            total_height = metrics.line_height;
        } else {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

lazy_static::lazy_static! {
    static ref TEXT_MEASURER: TextMeasurer = TextMeasurer::new();
}

/// Measures the rendered extent of `text` at the given font size.
///
/// Empty text measures zero in both dimensions.
pub fn measure(text: &str, font_size: f32) -> Size {
    TEXT_MEASURER.measure(text, font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_measures_zero() {
        assert!(measure("", 10.0).is_zero());
    }

    #[test]
    fn test_nonempty_text_has_extent() {
        let size = measure("Standing Area", 10.0);
        assert!(size.width() > 0.0);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_longer_text_is_wider() {
        let short = measure("GA", 10.0);
        let long = measure("General Admission", 10.0);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_larger_font_is_wider() {
        let small = measure("Balcony", 4.0);
        let normal = measure("Balcony", 6.0);
        assert!(normal.width() > small.width());
        assert!(normal.height() > small.height());
    }

    #[test]
    fn test_measurement_is_deterministic() {
        assert_eq!(measure("Row A", 6.0), measure("Row A", 6.0));
    }
}
