use super::*;

fn escape() -> Key {
    Key::new("Escape")
}

#[derive(Clone, Copy)]
enum Step {
    OpenClick,
    CloseClick,
    OverlayClick,
    Escape,
    OtherKey,
}

fn apply(nav: &mut MobileNav, step: Step) {
    match step {
        Step::OpenClick => {
            nav.open();
        }
        Step::CloseClick | Step::OverlayClick => {
            nav.close();
        }
        Step::Escape => {
            nav.on_key(&escape());
        }
        Step::OtherKey => {
            nav.on_key(&Key::new("Tab"));
        }
    }
}

// --- Basics ---

#[test]
fn starts_closed() {
    assert!(!MobileNav::new().is_open());
}

#[test]
fn with_open_seeds_state() {
    assert!(MobileNav::with_open(true).is_open());
    assert!(!MobileNav::with_open(false).is_open());
}

#[test]
fn open_sets_flag_and_view() {
    let mut nav = MobileNav::new();
    let view = nav.open();
    assert!(nav.is_open());
    assert!(view.open);
    assert_eq!(view.aria_expanded(), "true");
}

#[test]
fn close_clears_flag_and_view() {
    let mut nav = MobileNav::with_open(true);
    let view = nav.close();
    assert!(!nav.is_open());
    assert!(!view.open);
    assert_eq!(view.aria_expanded(), "false");
}

#[test]
fn open_is_idempotent() {
    let mut nav = MobileNav::new();
    assert_eq!(nav.open(), nav.open());
    assert!(nav.is_open());
}

#[test]
fn close_is_idempotent() {
    let mut nav = MobileNav::new();
    assert_eq!(nav.close(), nav.close());
    assert!(!nav.is_open());
}

// --- Escape ---

#[test]
fn escape_closes_when_open() {
    let mut nav = MobileNav::with_open(true);
    let view = nav.on_key(&escape());
    assert_eq!(view, Some(NavView { open: false }));
    assert!(!nav.is_open());
}

#[test]
fn escape_is_noop_when_closed() {
    let mut nav = MobileNav::new();
    assert_eq!(nav.on_key(&escape()), None);
    assert!(!nav.is_open());
}

#[test]
fn other_keys_ignored_while_open() {
    let mut nav = MobileNav::with_open(true);
    assert_eq!(nav.on_key(&Key::new("Enter")), None);
    assert!(nav.is_open());
}

// --- Sequences ---

#[test]
fn open_iff_last_relevant_action_was_open() {
    let sequences: &[&[Step]] = &[
        &[Step::OpenClick],
        &[Step::OpenClick, Step::CloseClick],
        &[Step::OpenClick, Step::OverlayClick],
        &[Step::OpenClick, Step::Escape],
        &[Step::OpenClick, Step::OtherKey],
        &[Step::Escape, Step::OpenClick],
        &[Step::CloseClick, Step::OpenClick, Step::OtherKey, Step::Escape, Step::OpenClick],
        &[Step::OpenClick, Step::OpenClick, Step::OverlayClick, Step::Escape],
        &[Step::OverlayClick, Step::CloseClick, Step::Escape],
    ];

    for seq in sequences {
        let mut nav = MobileNav::new();
        for &step in *seq {
            apply(&mut nav, step);
        }
        let expected = seq
            .iter()
            .rev()
            .find(|s| !matches!(s, Step::OtherKey))
            .is_some_and(|s| matches!(s, Step::OpenClick));
        assert_eq!(nav.is_open(), expected, "sequence of {} steps", seq.len());
    }
}
