//! Configuration for seatmap rendering.
//!
//! [`RenderConfig`] carries the root-level options applied to the emitted
//! SVG document. It implements [`serde::Deserialize`] for flexible loading
//! from external sources.

use serde::Deserialize;

fn default_aria_label() -> String {
    "Seat map".to_string()
}

/// Root-level rendering configuration.
///
/// # Example
///
/// ```
/// # use parterre::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.aria_label(), "Seat map");
/// assert!(config.class_name().is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// CSS class applied to the root SVG element.
    #[serde(default)]
    class_name: Option<String>,

    /// Accessible label for the seatmap root.
    #[serde(default = "default_aria_label")]
    aria_label: String,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `class_name` - Optional styling hook for the root element.
    /// * `aria_label` - Accessible label for the seatmap root.
    pub fn new(class_name: Option<String>, aria_label: impl Into<String>) -> Self {
        Self {
            class_name,
            aria_label: aria_label.into(),
        }
    }

    /// Returns the CSS class for the root element, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Returns the accessible label for the seatmap root.
    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_name: None,
            aria_label: default_aria_label(),
        }
    }
}
