use super::*;

#[test]
fn loading_document_is_not_ready() {
    assert!(!is_dom_ready("loading"));
}

#[test]
fn interactive_and_complete_are_ready() {
    assert!(is_dom_ready("interactive"));
    assert!(is_dom_ready("complete"));
}
