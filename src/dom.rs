//! Thin helpers over `web-sys` used by the header controller.
//!
//! Everything here touches the real DOM and is only exercised in a browser.
//! Failed DOM calls are logged and swallowed: a handler that cannot update
//! one attribute should still update the rest.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

use crate::config::{HeaderConfig, class_selector};
use crate::consts::ARIA_EXPANDED;
use crate::error::HeaderError;
use crate::menu::{MenuTree, aria_value};

/// Log a failed DOM call.
pub fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// First element matching `selector`, or `None` (an invalid selector is logged).
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("querySelector({selector:?}) failed: {err:?}");
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("querySelectorAll({selector:?}) failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    if on {
        report(classes.add_1(class), "classList.add");
    } else {
        report(classes.remove_1(class), "classList.remove");
    }
}

pub fn set_aria_expanded(el: &Element, expanded: bool) {
    report(el.set_attribute(ARIA_EXPANDED, aria_value(expanded)), "setAttribute(aria-expanded)");
}

/// [`MenuTree`] over live DOM elements.
///
/// Menu items are elements carrying the configured menu-item class; an
/// item's toggle is its direct child carrying the toggle class.
pub struct DomMenuTree<'a> {
    config: &'a HeaderConfig,
}

impl<'a> DomMenuTree<'a> {
    #[must_use]
    pub fn new(config: &'a HeaderConfig) -> Self {
        Self { config }
    }
}

impl MenuTree for DomMenuTree<'_> {
    type Node = Element;

    fn enclosing_item(&self, node: &Element) -> Option<Element> {
        match node.closest(&class_selector(&self.config.menu_item_class)) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("closest() failed: {err:?}");
                None
            }
        }
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let list = node.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn is_menu_item(&self, node: &Element) -> bool {
        node.class_list().contains(&self.config.menu_item_class)
    }

    fn is_expanded(&self, item: &Element) -> bool {
        item.class_list().contains(&self.config.expanded_class)
    }

    fn set_expanded(&mut self, item: &Element, expanded: bool) {
        set_class(item, &self.config.expanded_class, expanded);
    }

    fn toggle_of(&self, item: &Element) -> Option<Element> {
        let selector = format!(":scope > {}", class_selector(&self.config.submenu_toggle_class));
        match item.query_selector(&selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("querySelector({selector:?}) failed: {err:?}");
                None
            }
        }
    }

    fn set_aria_expanded(&mut self, toggle: &Element, expanded: bool) {
        set_aria_expanded(toggle, expanded);
    }
}

/// A registered event listener. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Dom`] if `addEventListener` throws.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, HeaderError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, callback })
    }

    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        report(
            self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            "removeEventListener",
        );
    }
}
