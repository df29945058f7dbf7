//! Sticky header state.
//!
//! The header's natural height is measured once, before any sticky class is
//! applied, and cached here. Each scroll/resize/load re-evaluation compares
//! the window's vertical scroll offset against that cached height.
//!
//! Scrolling past the height engages the sticky state: the header keeps an
//! inline height equal to the cached value (so the page does not jump when
//! the header leaves normal flow), gets the active class, and loses the
//! inactive class. Scrolling back releases it: the inactive class is added
//! only if the header was active, so exit transitions fire once per release.

#[cfg(test)]
#[path = "sticky_test.rs"]
mod sticky_test;

/// Cached header height plus the current sticky flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyHeader {
    original_height: f64,
    active: bool,
    inactive: bool,
}

/// Desired DOM state of the header after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyView {
    /// Header carries the sticky-active class.
    pub active: bool,
    /// Header carries the sticky-inactive class.
    pub inactive: bool,
    /// Inline height to reserve, in CSS pixels. `None` clears the override.
    pub reserved_height: Option<f64>,
}

impl StickyView {
    /// Inline `height` style value, e.g. `"80px"`.
    #[must_use]
    pub fn height_style(&self) -> Option<String> {
        self.reserved_height.map(|h| format!("{h}px"))
    }
}

impl StickyHeader {
    /// Create from the header's height measured at load time.
    ///
    /// Non-finite or negative measurements are treated as zero.
    #[must_use]
    pub fn new(original_height: f64) -> Self {
        let original_height = if original_height.is_finite() { original_height.max(0.0) } else { 0.0 };
        Self { original_height, active: false, inactive: false }
    }

    #[must_use]
    pub fn original_height(&self) -> f64 {
        self.original_height
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    /// Re-evaluate against the current vertical scroll offset.
    ///
    /// The offset must be strictly greater than the cached height to engage.
    /// A non-finite offset never engages.
    pub fn update(&mut self, scroll_y: f64) -> StickyView {
        if scroll_y > self.original_height {
            self.active = true;
            self.inactive = false;
            StickyView { active: true, inactive: false, reserved_height: Some(self.original_height) }
        } else {
            if self.active {
                self.inactive = true;
            }
            self.active = false;
            StickyView { active: false, inactive: self.inactive, reserved_height: None }
        }
    }
}
