use std::cell::{Ref, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use crate::config::{HeaderConfig, class_selector};
use crate::dom::{DomMenuTree, Listener, query, query_all, report, set_aria_expanded, set_class};
use crate::error::HeaderError;
use crate::input::{Key, StickyTrigger};
use crate::menu::{activate_parent_link, toggle_submenu};
use crate::nav::{MobileNav, NavView};
use crate::sticky::{StickyHeader, StickyView};

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Core header state: all logic that doesn't depend on the DOM.
///
/// Separated from `HeaderController` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct HeaderCore {
    pub nav: MobileNav,
    /// `None` when the page has no sticky header.
    pub sticky: Option<StickyHeader>,
}

impl HeaderCore {
    #[must_use]
    pub fn new(nav_open: bool) -> Self {
        Self { nav: MobileNav::with_open(nav_open), sticky: None }
    }

    /// Turn on the sticky header with the height measured at load time.
    ///
    /// The first measurement wins; later calls are ignored so the cached
    /// height never picks up a height changed by the sticky classes.
    pub fn enable_sticky(&mut self, original_height: f64) {
        if self.sticky.is_none() {
            self.sticky = Some(StickyHeader::new(original_height));
        }
    }

    // --- Mobile nav ---

    pub fn open_nav(&mut self) -> NavView {
        self.nav.open()
    }

    pub fn close_nav(&mut self) -> NavView {
        self.nav.close()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Option<NavView> {
        self.nav.on_key(key)
    }

    // --- Sticky header ---

    /// Re-evaluate the sticky state. `None` when the sticky header is disabled.
    pub fn on_viewport_change(&mut self, scroll_y: f64, trigger: StickyTrigger) -> Option<StickyView> {
        let sticky = self.sticky.as_mut()?;
        let view = sticky.update(scroll_y);
        log::trace!("sticky header on {trigger:?}: scroll_y={scroll_y} active={}", view.active);
        Some(view)
    }

    // --- Queries ---

    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    #[must_use]
    pub fn sticky_active(&self) -> bool {
        self.sticky.is_some_and(|s| s.is_active())
    }
}

/// Elements the mobile nav projects onto.
struct NavTargets {
    body: HtmlElement,
    open_trigger: Option<Element>,
    config: Rc<HeaderConfig>,
}

impl NavTargets {
    fn project(&self, view: NavView) {
        set_class(&self.body, &self.config.nav_open_class, view.open);
        if let Some(trigger) = &self.open_trigger {
            set_aria_expanded(trigger, view.open);
        }
    }
}

/// The header element and the window whose scroll offset drives it.
struct StickyTargets {
    window: Window,
    header: HtmlElement,
    config: Rc<HeaderConfig>,
}

impl StickyTargets {
    fn refresh(&self, core: &RefCell<HeaderCore>, trigger: StickyTrigger) {
        let scroll_y = match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("window.scrollY failed: {err:?}");
                return;
            }
        };
        let view = core.borrow_mut().on_viewport_change(scroll_y, trigger);
        if let Some(view) = view {
            self.project(view);
        }
    }

    fn project(&self, view: StickyView) {
        let style = self.header.style();
        let active = &self.config.sticky_active_class;
        let inactive = &self.config.sticky_inactive_class;
        if view.active {
            if let Some(height) = view.height_style() {
                report(style.set_property("height", &height), "style.height");
            }
            set_class(&self.header, active, true);
            set_class(&self.header, inactive, false);
        } else {
            // Inactive goes on before active comes off so exit transitions can key off it.
            if view.inactive {
                set_class(&self.header, inactive, true);
            }
            report(style.remove_property("height"), "style.removeProperty(height)");
            set_class(&self.header, active, false);
        }
    }
}

/// The header controller. Wraps `HeaderCore` and owns every DOM listener it registered.
///
/// Dropping the controller unregisters all listeners.
pub struct HeaderController {
    core: Rc<RefCell<HeaderCore>>,
    listeners: Vec<Listener>,
}

impl HeaderController {
    /// Bind the header behaviors to `doc`.
    ///
    /// Optional elements that are missing disable only their own feature.
    /// The sticky height is measured here, once, before any sticky class is
    /// applied, and the sticky state is evaluated once before returning.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, the document has no window or body,
    /// or registering a listener throws.
    pub fn init(doc: &Document, config: HeaderConfig) -> Result<Self, HeaderError> {
        config.validate()?;
        let config = Rc::new(config);
        let window = doc.default_view().ok_or(HeaderError::NoWindow)?;
        let body = doc.body().ok_or(HeaderError::NoBody)?;

        let nav_open = body.class_list().contains(&config.nav_open_class);
        let core = Rc::new(RefCell::new(HeaderCore::new(nav_open)));
        let mut controller = Self { core, listeners: Vec::new() };

        let nav = Rc::new(NavTargets {
            body,
            open_trigger: query(doc, &config.open_trigger_selector),
            config: Rc::clone(&config),
        });
        controller.bind_mobile_nav(doc, &nav)?;
        controller.bind_submenus(doc, &config)?;
        controller.bind_parent_links(doc, &config)?;
        controller.bind_sticky(doc, &window, &config)?;

        log::debug!(
            "header controller ready: {} listeners, sticky={}",
            controller.listeners.len(),
            controller.core().sticky.is_some()
        );
        Ok(controller)
    }

    fn bind_mobile_nav(&mut self, doc: &Document, nav: &Rc<NavTargets>) -> Result<(), HeaderError> {
        if let Some(trigger) = &nav.open_trigger {
            let (core, nav) = (Rc::clone(&self.core), Rc::clone(nav));
            self.listen(trigger, "click", move |event: Event| {
                event.prevent_default();
                let view = core.borrow_mut().open_nav();
                nav.project(view);
            })?;
        }

        if let Some(close) = query(doc, &nav.config.close_trigger_selector) {
            let (core, nav) = (Rc::clone(&self.core), Rc::clone(nav));
            self.listen(&close, "click", move |event: Event| {
                event.prevent_default();
                let view = core.borrow_mut().close_nav();
                nav.project(view);
            })?;
        }

        if let Some(overlay) = query(doc, &nav.config.overlay_selector) {
            let (core, nav) = (Rc::clone(&self.core), Rc::clone(nav));
            self.listen(&overlay, "click", move |_event: Event| {
                let view = core.borrow_mut().close_nav();
                nav.project(view);
            })?;
        }

        // Registered even without any nav elements; it is a no-op while closed.
        let (core, nav) = (Rc::clone(&self.core), Rc::clone(nav));
        self.listen(doc, "keydown", move |event: Event| {
            let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let view = core.borrow_mut().on_key_down(&Key::new(keyboard.key()));
            if let Some(view) = view {
                nav.project(view);
            }
        })
    }

    fn bind_submenus(&mut self, doc: &Document, config: &Rc<HeaderConfig>) -> Result<(), HeaderError> {
        for toggle in query_all(doc, &class_selector(&config.submenu_toggle_class)) {
            let (config, target) = (Rc::clone(config), toggle.clone());
            self.listen(&toggle, "click", move |event: Event| {
                event.prevent_default();
                let mut tree = DomMenuTree::new(&config);
                if let Some(expanded) = toggle_submenu(&mut tree, &target) {
                    log::debug!("submenu {}", if expanded { "expanded" } else { "collapsed" });
                }
            })?;
        }
        Ok(())
    }

    fn bind_parent_links(&mut self, doc: &Document, config: &Rc<HeaderConfig>) -> Result<(), HeaderError> {
        for link in query_all(doc, &config.parent_link_selector) {
            if !config.is_placeholder_href(link.get_attribute("href").as_deref()) {
                continue;
            }
            let (config, target) = (Rc::clone(config), link.clone());
            self.listen(&link, "click", move |event: Event| {
                event.prevent_default();
                let mut tree = DomMenuTree::new(&config);
                if let Some(expanded) = activate_parent_link(&mut tree, &target) {
                    log::debug!("submenu {} from parent link", if expanded { "expanded" } else { "collapsed" });
                }
            })?;
        }
        Ok(())
    }

    fn bind_sticky(&mut self, doc: &Document, window: &Window, config: &Rc<HeaderConfig>) -> Result<(), HeaderError> {
        let Some(marker) = query(doc, &config.sticky_marker_selector) else {
            log::debug!("no sticky marker on page; sticky header disabled");
            return Ok(());
        };
        let Some(header) = marker.next_element_sibling() else {
            log::warn!("sticky marker {:?} has no following header element; sticky header disabled", config.sticky_marker_selector);
            return Ok(());
        };
        let Ok(header) = header.dyn_into::<HtmlElement>() else {
            log::warn!("element after sticky marker is not an HTML element; sticky header disabled");
            return Ok(());
        };

        self.core.borrow_mut().enable_sticky(header.get_bounding_client_rect().height());

        let targets = Rc::new(StickyTargets { window: window.clone(), header, config: Rc::clone(config) });
        for trigger in StickyTrigger::LISTENED {
            let Some(event) = trigger.event_name() else {
                continue;
            };
            let (core, targets) = (Rc::clone(&self.core), Rc::clone(&targets));
            let listener = Listener::new(window, event, true, move |_event: Event| targets.refresh(&core, trigger))?;
            self.listeners.push(listener);
        }

        targets.refresh(&self.core, StickyTrigger::Init);
        Ok(())
    }

    fn listen(
        &mut self,
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), HeaderError> {
        self.listeners.push(Listener::new(target, event, false, handler)?);
        Ok(())
    }

    // --- Queries ---

    /// Current header state.
    #[must_use]
    pub fn core(&self) -> Ref<'_, HeaderCore> {
        self.core.borrow()
    }

    /// Event names of every registered listener, in registration order.
    #[must_use]
    pub fn listened_events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(Listener::event).collect()
    }
}
