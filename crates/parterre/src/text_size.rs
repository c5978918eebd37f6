//! Responsive text-size coordination.
//!
//! Label-bearing elements share a single effective font size: one long
//! label anywhere shrinks every label that opts in. Each participating
//! element registers its intrinsic size need while it is part of the
//! rendered tree and unregisters when it leaves. The effective size is
//! the minimum across all currently registered needs.
//!
//! The registry is an explicit owned object held by the rendered root and
//! passed down by reference; descendants contribute through `register` /
//! `unregister` calls. Per-variant counts make registration order
//! irrelevant: the effective size depends only on the current multiset.

/// Labels longer than this many characters request the small size.
/// Two characters is the widest label that fits a seat cell at the
/// normal size.
pub const LONG_LABEL_LEN: usize = 2;

/// The two logical text sizes. Smaller variants order first so the
/// effective size is the minimum of the registered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextSize {
    Small,
    Normal,
}

impl TextSize {
    /// Returns the font size in render units for this logical size.
    pub fn font_size(self) -> f32 {
        match self {
            Self::Small => 4.0,
            Self::Normal => 6.0,
        }
    }

    /// Returns the intrinsic size need for a label: `Small` when the text
    /// exceeds [`LONG_LABEL_LEN`] characters, `Normal` otherwise.
    pub fn intrinsic_for(label: &str) -> Self {
        if label.chars().count() > LONG_LABEL_LEN {
            Self::Small
        } else {
            Self::Normal
        }
    }
}

/// A multiset of requested text sizes.
///
/// Tracks how many contributors requested each size. Registration and
/// deregistration are commutative and never leak: unregistering a size
/// with no registered contributors is a no-op.
#[derive(Debug, Default)]
pub struct TextSizeRegistry {
    small: usize,
    normal: usize,
}

impl TextSizeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one contributor requesting the given size.
    pub fn register(&mut self, size: TextSize) {
        match size {
            TextSize::Small => self.small += 1,
            TextSize::Normal => self.normal += 1,
        }
    }

    /// Removes one contributor requesting the given size.
    pub fn unregister(&mut self, size: TextSize) {
        match size {
            TextSize::Small => self.small = self.small.saturating_sub(1),
            TextSize::Normal => self.normal = self.normal.saturating_sub(1),
        }
    }

    /// Returns true when no contributors are registered.
    pub fn is_empty(&self) -> bool {
        self.small == 0 && self.normal == 0
    }

    /// Returns the effective size: the minimum across registered sizes,
    /// or `Normal` when the registry is empty.
    pub fn effective(&self) -> TextSize {
        if self.small > 0 {
            TextSize::Small
        } else {
            TextSize::Normal
        }
    }
}
