//! Modal/overlay controller
//!
//! Tracks the "currently inspected item" for the certification lightbox.
//! At most one item is open at a time; opening a second item replaces the
//! first without an explicit close.

/// A rectangle in terminal cells, recorded by the renderer so click routing
/// can distinguish the modal content from the backdrop without this crate
/// depending on a terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// Exclusive open/close state for one overlay.
#[derive(Debug, Clone, Default)]
pub struct ModalController<T> {
    open: Option<T>,
    /// Content rect from the last render; `None` while closed. A click
    /// inside it must not close the modal, a click outside it must.
    pub content_region: Option<Region>,
}

impl<T> ModalController<T> {
    pub fn new() -> Self {
        Self {
            open: None,
            content_region: None,
        }
    }

    /// Open an item, replacing whatever was open. Last open wins.
    pub fn open(&mut self, item: T) {
        self.open = Some(item);
    }

    /// Close the modal. Idempotent: closing a closed modal is a no-op.
    pub fn close(&mut self) {
        self.open = None;
        self.content_region = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// True when a click at the given cell lands on the backdrop (outside
    /// the content region) of an open modal.
    pub fn is_backdrop_click(&self, column: u16, row: u16) -> bool {
        match (&self.open, &self.content_region) {
            (Some(_), Some(region)) => !region.contains(column, row),
            (Some(_), None) => true, // not rendered yet; treat as backdrop
            (None, _) => false,
        }
    }
}
