use super::*;

#[test]
fn default_matches_consts() {
    let config = HeaderConfig::default();
    assert_eq!(config.nav_open_class, "mobile-nav-open");
    assert_eq!(config.submenu_toggle_class, "submenu-toggle");
    assert_eq!(config.placeholder_hrefs, vec!["#".to_owned()]);
    assert_eq!(config.sticky_marker_selector, ".sticky-header");
}

#[test]
fn default_is_valid() {
    assert!(HeaderConfig::default().validate().is_ok());
}

#[test]
fn empty_json_yields_defaults() {
    let config = HeaderConfig::from_json("{}");
    assert!(matches!(config, Ok(c) if c == HeaderConfig::default()));
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let Ok(config) = HeaderConfig::from_json(r##"{"nav_open_class": "menu-is-open", "placeholder_hrefs": ["#", "javascript:;"]}"##)
    else {
        panic!("config should parse");
    };
    assert_eq!(config.nav_open_class, "menu-is-open");
    assert_eq!(config.placeholder_hrefs, vec!["#".to_owned(), "javascript:;".to_owned()]);
    assert!(config.is_placeholder_href(Some("javascript:;")));
    assert_eq!(config.overlay_selector, HeaderConfig::default().overlay_selector);
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(HeaderConfig::from_json("{nope"), Err(HeaderError::ConfigParse(_))));
}

#[test]
fn wrong_type_is_parse_error() {
    assert!(matches!(
        HeaderConfig::from_json(r#"{"expanded_class": 3}"#),
        Err(HeaderError::ConfigParse(_))
    ));
}

#[test]
fn empty_class_rejected() {
    let err = HeaderConfig::from_json(r#"{"expanded_class": ""}"#);
    assert!(matches!(err, Err(HeaderError::InvalidConfig { field: "expanded_class", .. })));
}

#[test]
fn class_with_space_rejected() {
    let err = HeaderConfig::from_json(r#"{"menu_item_class": "menu item"}"#);
    assert!(matches!(err, Err(HeaderError::InvalidConfig { field: "menu_item_class", .. })));
}

#[test]
fn class_with_leading_dot_rejected() {
    let err = HeaderConfig::from_json(r#"{"sticky_active_class": ".is-sticky"}"#);
    assert!(matches!(err, Err(HeaderError::InvalidConfig { field: "sticky_active_class", .. })));
}

#[test]
fn blank_selector_rejected() {
    let err = HeaderConfig::from_json(r#"{"overlay_selector": "  "}"#);
    assert!(matches!(err, Err(HeaderError::InvalidConfig { field: "overlay_selector", .. })));
}

#[test]
fn identical_sticky_classes_rejected() {
    let err = HeaderConfig::from_json(r#"{"sticky_inactive_class": "is-sticky"}"#);
    assert!(matches!(err, Err(HeaderError::InvalidConfig { field: "sticky_inactive_class", .. })));
}

#[test]
fn error_messages_name_the_field() {
    let err = HeaderError::InvalidConfig { field: "overlay_selector", reason: "selector is empty" };
    assert_eq!(err.to_string(), "invalid header config field `overlay_selector`: selector is empty");
}

#[test]
fn class_selector_prefixes_dot() {
    assert_eq!(class_selector("submenu-toggle"), ".submenu-toggle");
}

#[test]
fn placeholder_check_uses_configured_list() {
    let config = HeaderConfig::default();
    assert!(config.is_placeholder_href(Some("#")));
    assert!(!config.is_placeholder_href(Some("/shop")));
}
