use super::*;

#[test]
fn configured_state_has_hosted_ui() {
    let state = test_helpers::test_app_state();
    assert!(state.hosted_ui.is_some());
    assert_eq!(state.config.sign_in_language, "ja");
}

#[test]
fn unconfigured_state_disables_hosted_ui() {
    let state = test_helpers::unconfigured_app_state();
    assert!(state.hosted_ui.is_none());
}

#[test]
fn partial_config_disables_hosted_ui() {
    let config = IdentityConfig { redirect_sign_in: None, ..test_helpers::configured() };
    let state = AppState::new(config);
    assert!(state.hosted_ui.is_none());
    assert_eq!(state.config.region.as_deref(), Some("ap-northeast-1"));
}
