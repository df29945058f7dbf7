//! Mobile navigation overlay state.
//!
//! The overlay is either open or closed. Every transition returns a
//! [`NavView`] describing what the DOM should look like afterwards; the
//! binding layer projects it onto the body class and the trigger's
//! `aria-expanded`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::input::Key;
use crate::menu::aria_value;

/// Open/closed flag for the mobile nav overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

/// Desired DOM state of the overlay after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    /// Body carries the nav-open class.
    pub open: bool,
}

impl NavView {
    /// Value for the open trigger's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        aria_value(self.open)
    }
}

impl MobileNav {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a known state, e.g. when the page was rendered with the overlay open.
    #[must_use]
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> NavView {
        self.open = true;
        self.view()
    }

    pub fn close(&mut self) -> NavView {
        self.open = false;
        self.view()
    }

    /// Handle a keydown anywhere in the document.
    ///
    /// Only Escape while open does anything; it closes the overlay. Returns
    /// `None` when the key was ignored.
    pub fn on_key(&mut self, key: &Key) -> Option<NavView> {
        if key.is_escape() && self.open {
            Some(self.close())
        } else {
            None
        }
    }

    fn view(self) -> NavView {
        NavView { open: self.open }
    }
}
