//! Interaction dispatch for bookable elements.
//!
//! A bookable leaf holds two optional callbacks: one for the enabled
//! path and one for the disabled path. An activating interaction on a
//! disabled leaf only ever reaches the disabled callback, and vice
//! versa; the contract holds for pointer and keyboard interactions
//! alike. The uniform [`BookableClickEvent`] fires for disabled leaves
//! too — deciding whether to act on it belongs to the caller.

use crate::tree::{Bookable, BookableKind};

/// Keys recognized when a bookable has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

/// An interaction with a bookable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A pointer click.
    Click,
    /// A key pressed while the element has focus.
    KeyDown(Key),
}

impl Interaction {
    /// Returns true when this interaction activates a bookable:
    /// a click, or Enter/Space on a focused element.
    pub fn activates(self) -> bool {
        match self {
            Self::Click => true,
            Self::KeyDown(key) => matches!(key, Key::Enter | Key::Space),
        }
    }
}

/// The uniform event reported for every activation of a seat or volume.
#[derive(Debug, Clone, PartialEq)]
pub struct BookableClickEvent {
    id: String,
    kind: BookableKind,
    disabled: bool,
}

impl BookableClickEvent {
    /// The `id` of the seat or volume that was activated.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the activated element is a seat or a volume.
    pub fn kind(&self) -> BookableKind {
        self.kind
    }

    /// Whether the activated element is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }
}

/// The two optional interaction callbacks a bookable leaf holds.
///
/// `on_click` fires only for enabled leaves, `on_disabled_click` only
/// for disabled ones.
#[derive(Default)]
pub struct ClickHandlers<'a> {
    on_click: Option<Box<dyn FnMut(&BookableClickEvent) + 'a>>,
    on_disabled_click: Option<Box<dyn FnMut(&BookableClickEvent) + 'a>>,
}

impl<'a> ClickHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enabled-path callback (builder style).
    pub fn on_click(mut self, callback: impl FnMut(&BookableClickEvent) + 'a) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Sets the disabled-path callback (builder style).
    pub fn on_disabled_click(mut self, callback: impl FnMut(&BookableClickEvent) + 'a) -> Self {
        self.on_disabled_click = Some(Box::new(callback));
        self
    }

    /// Routes an event to the callback matching its disabled state.
    pub fn handle(&mut self, event: &BookableClickEvent) {
        let callback = if event.disabled() {
            self.on_disabled_click.as_mut()
        } else {
            self.on_click.as_mut()
        };
        if let Some(callback) = callback {
            callback(event);
        }
    }
}

impl std::fmt::Debug for ClickHandlers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_disabled_click", &self.on_disabled_click.is_some())
            .finish()
    }
}

/// Maps an interaction on a bookable to its uniform event.
///
/// Returns `None` for non-activating interactions (keys other than
/// Enter/Space). The event mirrors the bookable's disabled flag; it is
/// produced for disabled bookables too.
pub fn dispatch(bookable: &Bookable, interaction: Interaction) -> Option<BookableClickEvent> {
    if !interaction.activates() {
        return None;
    }
    Some(BookableClickEvent {
        id: bookable.id().to_string(),
        kind: bookable.kind(),
        disabled: bookable.disabled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(disabled: bool) -> Bookable {
        Bookable::new("seat-1", BookableKind::Seat, disabled, false)
    }

    #[test]
    fn test_click_on_enabled_seat() {
        let event = dispatch(&seat(false), Interaction::Click).unwrap();
        assert_eq!(event.id(), "seat-1");
        assert_eq!(event.kind(), BookableKind::Seat);
        assert!(!event.disabled());
    }

    #[test]
    fn test_click_on_disabled_seat_reports_disabled() {
        let event = dispatch(&seat(true), Interaction::Click).unwrap();
        assert!(event.disabled());
    }

    #[test]
    fn test_keyboard_parity_with_click() {
        let click = dispatch(&seat(false), Interaction::Click);
        let enter = dispatch(&seat(false), Interaction::KeyDown(Key::Enter));
        let space = dispatch(&seat(false), Interaction::KeyDown(Key::Space));
        assert_eq!(click, enter);
        assert_eq!(click, space);
    }

    #[test]
    fn test_other_keys_do_not_activate() {
        assert_eq!(dispatch(&seat(false), Interaction::KeyDown(Key::Other)), None);
        assert_eq!(dispatch(&seat(true), Interaction::KeyDown(Key::Other)), None);
    }

    #[test]
    fn test_disabled_click_never_reaches_enabled_handler() {
        let mut clicked = 0;
        let mut disabled_clicked = 0;
        {
            let mut handlers = ClickHandlers::new()
                .on_click(|_| clicked += 1)
                .on_disabled_click(|_| disabled_clicked += 1);

            let event = dispatch(&seat(true), Interaction::Click).unwrap();
            handlers.handle(&event);
        }
        assert_eq!(clicked, 0);
        assert_eq!(disabled_clicked, 1);
    }

    #[test]
    fn test_enabled_click_never_reaches_disabled_handler() {
        let mut clicked = 0;
        let mut disabled_clicked = 0;
        {
            let mut handlers = ClickHandlers::new()
                .on_click(|_| clicked += 1)
                .on_disabled_click(|_| disabled_clicked += 1);

            let event = dispatch(&seat(false), Interaction::Click).unwrap();
            handlers.handle(&event);
        }
        assert_eq!(clicked, 1);
        assert_eq!(disabled_clicked, 0);
    }

    #[test]
    fn test_missing_handler_is_noop() {
        let mut handlers = ClickHandlers::new();
        let event = dispatch(&seat(false), Interaction::Click).unwrap();
        handlers.handle(&event);

        let event = dispatch(&seat(true), Interaction::Click).unwrap();
        handlers.handle(&event);
    }

    #[test]
    fn test_keyboard_on_disabled_seat_stays_on_disabled_path() {
        let mut clicked = 0;
        {
            let mut handlers = ClickHandlers::new().on_click(|_| clicked += 1);
            if let Some(event) = dispatch(&seat(true), Interaction::KeyDown(Key::Enter)) {
                handlers.handle(&event);
            }
        }
        assert_eq!(clicked, 0);
    }
}
