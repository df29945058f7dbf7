#![allow(clippy::float_cmp)]

use super::*;

fn escape() -> Key {
    Key::new("Escape")
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_core_is_closed_without_sticky() {
    let core = HeaderCore::default();
    assert!(!core.nav_open());
    assert!(core.sticky.is_none());
    assert!(!core.sticky_active());
}

#[test]
fn new_seeds_nav_state() {
    assert!(HeaderCore::new(true).nav_open());
    assert!(!HeaderCore::new(false).nav_open());
}

#[test]
fn enable_sticky_measures_once() {
    let mut core = HeaderCore::new(false);
    core.enable_sticky(80.0);
    core.enable_sticky(40.0);
    assert_eq!(core.sticky.map(|s| s.original_height()), Some(80.0));
}

// =============================================================
// Mobile nav
// =============================================================

#[test]
fn open_then_close() {
    let mut core = HeaderCore::new(false);
    assert!(core.open_nav().open);
    assert!(core.nav_open());
    assert!(!core.close_nav().open);
    assert!(!core.nav_open());
}

#[test]
fn escape_closes_open_nav() {
    let mut core = HeaderCore::new(true);
    assert_eq!(core.on_key_down(&escape()), Some(NavView { open: false }));
    assert!(!core.nav_open());
}

#[test]
fn escape_ignored_when_closed() {
    let mut core = HeaderCore::new(false);
    assert_eq!(core.on_key_down(&escape()), None);
}

#[test]
fn nav_works_without_sticky_header() {
    let mut core = HeaderCore::new(false);
    core.open_nav();
    assert_eq!(core.on_viewport_change(500.0, StickyTrigger::Scroll), None);
    assert!(core.nav_open());
}

// =============================================================
// Sticky header
// =============================================================

#[test]
fn viewport_change_without_sticky_is_none() {
    let mut core = HeaderCore::default();
    assert_eq!(core.on_viewport_change(0.0, StickyTrigger::Init), None);
}

#[test]
fn init_evaluation_at_top() {
    let mut core = HeaderCore::new(false);
    core.enable_sticky(80.0);
    let Some(view) = core.on_viewport_change(0.0, StickyTrigger::Init) else {
        panic!("sticky header should be enabled");
    };
    assert!(!view.active);
    assert_eq!(view.height_style(), None);
}

#[test]
fn init_evaluation_when_loaded_scrolled() {
    let mut core = HeaderCore::new(false);
    core.enable_sticky(80.0);
    let view = core.on_viewport_change(300.0, StickyTrigger::Init);
    assert_eq!(view.and_then(|v| v.height_style()).as_deref(), Some("80px"));
    assert!(core.sticky_active());
}

#[test]
fn scroll_down_and_back() {
    let mut core = HeaderCore::new(false);
    core.enable_sticky(80.0);
    core.on_viewport_change(81.0, StickyTrigger::Scroll);
    assert!(core.sticky_active());

    let view = core.on_viewport_change(0.0, StickyTrigger::Scroll);
    assert_eq!(view, Some(StickyView { active: false, inactive: true, reserved_height: None }));
    assert!(!core.sticky_active());
}

#[test]
fn every_trigger_evaluates_the_same_way() {
    for trigger in [StickyTrigger::Init, StickyTrigger::Resize, StickyTrigger::Scroll, StickyTrigger::Load] {
        let mut core = HeaderCore::new(false);
        core.enable_sticky(80.0);
        assert_eq!(core.on_viewport_change(81.0, trigger).map(|v| v.active), Some(true));
    }
}

#[test]
fn sticky_and_nav_are_independent() {
    let mut core = HeaderCore::new(false);
    core.enable_sticky(80.0);
    core.open_nav();
    core.on_viewport_change(120.0, StickyTrigger::Scroll);
    core.on_key_down(&escape());
    assert!(!core.nav_open());
    assert!(core.sticky_active());
}
