//! Default names for the header's DOM contract.
//!
//! Every value here is the default for a field of
//! [`HeaderConfig`](crate::config::HeaderConfig); pages with different markup
//! override them through the config instead of editing these constants.

// ── Mobile navigation ───────────────────────────────────────────

/// Class placed on `<body>` while the mobile nav overlay is open.
pub const NAV_OPEN_CLASS: &str = "mobile-nav-open";

/// Control that opens the overlay (usually the hamburger button).
pub const OPEN_TRIGGER_SELECTOR: &str = ".mobile-nav-toggle";

/// Control inside the overlay that closes it.
pub const CLOSE_TRIGGER_SELECTOR: &str = ".mobile-nav-close";

/// Backdrop behind the overlay; clicking it closes the nav.
pub const OVERLAY_SELECTOR: &str = ".mobile-nav-overlay";

// ── Submenus ────────────────────────────────────────────────────

/// Class carried by every menu item, at any nesting level.
pub const MENU_ITEM_CLASS: &str = "menu-item";

/// Class placed on a menu item whose submenu is expanded.
pub const EXPANDED_CLASS: &str = "submenu-open";

/// Class of the expand/collapse control; a direct child of its menu item.
pub const SUBMENU_TOGGLE_CLASS: &str = "submenu-toggle";

/// Top-level links that may delegate clicks to their item's toggle.
pub const PARENT_LINK_SELECTOR: &str = ".main-menu > .menu-item > a";

/// Href used on parent links that only exist to hold a submenu.
pub const PLACEHOLDER_HREF: &str = "#";

// ── Sticky header ───────────────────────────────────────────────

/// Marker element placed immediately before the header.
pub const STICKY_MARKER_SELECTOR: &str = ".sticky-header";

/// Header class while the page is scrolled past the header's height.
pub const STICKY_ACTIVE_CLASS: &str = "is-sticky";

/// Header class after leaving the sticky state; hook for exit transitions.
pub const STICKY_INACTIVE_CLASS: &str = "is-sticky-inactive";

// ── DOM ─────────────────────────────────────────────────────────

/// Body attribute holding an optional JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-header-config";

pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Key name reported by `KeyboardEvent.key` for the escape key.
pub const ESCAPE_KEY: &str = "Escape";
