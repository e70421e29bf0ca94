use super::*;

#[test]
fn sign_in_url_endpoint_without_language() {
    assert_eq!(sign_in_url_endpoint(None), "/api/auth/signin-url");
    assert_eq!(sign_in_url_endpoint(Some("  ")), "/api/auth/signin-url");
}

#[test]
fn sign_in_url_endpoint_with_language() {
    assert_eq!(sign_in_url_endpoint(Some("ja")), "/api/auth/signin-url?lang=ja");
}

#[test]
fn sign_in_url_endpoint_encodes_language() {
    assert_eq!(sign_in_url_endpoint(Some("zh&x")), "/api/auth/signin-url?lang=zh%26x");
}

#[test]
fn status_error_unauthorized_means_no_session() {
    assert_eq!(status_error(401), IdentityError::NoSession);
}

#[test]
fn status_error_unavailable() {
    assert_eq!(status_error(503), IdentityError::Unavailable);
}

#[test]
fn status_error_other_status_kept() {
    assert_eq!(status_error(502), IdentityError::Status(502));
}

#[test]
fn endpoints_point_at_identity_routes() {
    assert_eq!(ME_ENDPOINT, "/api/auth/me");
    assert_eq!(ATTRIBUTES_ENDPOINT, "/api/auth/attributes");
    assert_eq!(TOKENS_ENDPOINT, "/api/auth/tokens");
    assert_eq!(SIGN_OUT_ENDPOINT, "/api/auth/signout");
    assert_eq!(CONFIG_ENDPOINT, "/api/config");
}
