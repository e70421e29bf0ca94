use super::*;

#[test]
fn toggle_label_follows_visibility() {
    assert_eq!(token_toggle_label(false), "Show ID token");
    assert_eq!(token_toggle_label(true), "Hide token");
}
