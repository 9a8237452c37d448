//! Collapsible header navigation

use tracing::trace;
use vitrine_model::NavLink;

/// Mobile navigation menu. Starts closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
    links: Vec<NavLink>,
}

impl NavMenu {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { open: false, links }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        trace!(open = self.open, "nav menu toggled");
        self.open
    }

    /// Close the menu, e.g. after a link was followed. Returns whether it
    /// was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
