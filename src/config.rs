//! The header's DOM contract: which classes and selectors it binds to.
//!
//! Defaults come from [`crate::consts`]. A page can override any subset by
//! putting a JSON object in the body's `data-header-config` attribute; the
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::HeaderError;

/// Class names and selectors used by the header controller.
///
/// Fields ending in `_class` are bare class names (no leading dot). Fields
/// ending in `_selector` are CSS selectors passed to `querySelector`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub nav_open_class: String,
    pub open_trigger_selector: String,
    pub close_trigger_selector: String,
    pub overlay_selector: String,
    pub menu_item_class: String,
    pub expanded_class: String,
    pub submenu_toggle_class: String,
    pub parent_link_selector: String,
    /// Href values that mark a parent link as non-navigating.
    pub placeholder_hrefs: Vec<String>,
    pub sticky_marker_selector: String,
    pub sticky_active_class: String,
    pub sticky_inactive_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            nav_open_class: consts::NAV_OPEN_CLASS.to_owned(),
            open_trigger_selector: consts::OPEN_TRIGGER_SELECTOR.to_owned(),
            close_trigger_selector: consts::CLOSE_TRIGGER_SELECTOR.to_owned(),
            overlay_selector: consts::OVERLAY_SELECTOR.to_owned(),
            menu_item_class: consts::MENU_ITEM_CLASS.to_owned(),
            expanded_class: consts::EXPANDED_CLASS.to_owned(),
            submenu_toggle_class: consts::SUBMENU_TOGGLE_CLASS.to_owned(),
            parent_link_selector: consts::PARENT_LINK_SELECTOR.to_owned(),
            placeholder_hrefs: vec![consts::PLACEHOLDER_HREF.to_owned()],
            sticky_marker_selector: consts::STICKY_MARKER_SELECTOR.to_owned(),
            sticky_active_class: consts::STICKY_ACTIVE_CLASS.to_owned(),
            sticky_inactive_class: consts::STICKY_INACTIVE_CLASS.to_owned(),
        }
    }
}

impl HeaderConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::ConfigParse`] for malformed JSON or wrongly typed
    /// fields, and [`HeaderError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, HeaderError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that class names are usable with `classList` and selectors are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), HeaderError> {
        let classes = [
            ("nav_open_class", &self.nav_open_class),
            ("menu_item_class", &self.menu_item_class),
            ("expanded_class", &self.expanded_class),
            ("submenu_toggle_class", &self.submenu_toggle_class),
            ("sticky_active_class", &self.sticky_active_class),
            ("sticky_inactive_class", &self.sticky_inactive_class),
        ];
        for (field, value) in classes {
            check_class_name(field, value)?;
        }

        let selectors = [
            ("open_trigger_selector", &self.open_trigger_selector),
            ("close_trigger_selector", &self.close_trigger_selector),
            ("overlay_selector", &self.overlay_selector),
            ("parent_link_selector", &self.parent_link_selector),
            ("sticky_marker_selector", &self.sticky_marker_selector),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(HeaderError::InvalidConfig { field, reason: "selector is empty" });
            }
        }

        if self.sticky_active_class == self.sticky_inactive_class {
            return Err(HeaderError::InvalidConfig {
                field: "sticky_inactive_class",
                reason: "must differ from sticky_active_class",
            });
        }
        Ok(())
    }

    /// Whether `href` is one of the configured placeholder values.
    #[must_use]
    pub fn is_placeholder_href(&self, href: Option<&str>) -> bool {
        crate::menu::is_placeholder_href(href, &self.placeholder_hrefs)
    }
}

/// Turn a bare class name into a class selector.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

fn check_class_name(field: &'static str, value: &str) -> Result<(), HeaderError> {
    if value.is_empty() {
        return Err(HeaderError::InvalidConfig { field, reason: "class name is empty" });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(HeaderError::InvalidConfig { field, reason: "class name contains whitespace" });
    }
    if value.starts_with('.') {
        return Err(HeaderError::InvalidConfig { field, reason: "class name must not start with '.'" });
    }
    Ok(())
}
