//! Input model: keys and the window events that drive the sticky header.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::ESCAPE_KEY;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`, `"Enter"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Whether this is the escape key.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == ESCAPE_KEY
    }
}

/// Why the sticky header state is being re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyTrigger {
    /// One synchronous evaluation during initialization.
    Init,
    /// Window `resize`.
    Resize,
    /// Window `scroll`.
    Scroll,
    /// Window `load` (late images/fonts may have moved the scroll offset).
    Load,
}

impl StickyTrigger {
    /// The window events the controller listens to, in registration order.
    pub const LISTENED: [Self; 3] = [Self::Resize, Self::Scroll, Self::Load];

    /// DOM event name, or `None` for the synthetic init trigger.
    #[must_use]
    pub fn event_name(self) -> Option<&'static str> {
        match self {
            Self::Init => None,
            Self::Resize => Some("resize"),
            Self::Scroll => Some("scroll"),
            Self::Load => Some("load"),
        }
    }
}
