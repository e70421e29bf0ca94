use std::collections::HashMap;

use super::*;

fn test_config() -> IdentityConfig {
    IdentityConfig {
        client_id: Some("client123".into()),
        domain: Some("demo.auth.ap-northeast-1.amazoncognito.com".into()),
        redirect_sign_in: Some("http://localhost:3000/auth/callback".into()),
        redirect_sign_out: Some("http://localhost:3000/".into()),
        ..IdentityConfig::default()
    }
}

fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

fn jwt_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","kid":"k1"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

// =============================================================================
// from_config
// =============================================================================

#[test]
fn from_config_requires_domain() {
    let cfg = IdentityConfig { domain: None, ..test_config() };
    let err = HostedUi::from_config(&cfg).unwrap_err();
    assert!(matches!(err, HostedUiError::NotConfigured("COGNITO_DOMAIN")));
}

#[test]
fn from_config_requires_client_id() {
    let cfg = IdentityConfig { client_id: None, ..test_config() };
    let err = HostedUi::from_config(&cfg).unwrap_err();
    assert!(matches!(err, HostedUiError::NotConfigured("USER_POOL_CLIENT_ID")));
}

#[test]
fn from_config_requires_redirect_sign_in() {
    let cfg = IdentityConfig { redirect_sign_in: None, ..test_config() };
    let err = HostedUi::from_config(&cfg).unwrap_err();
    assert!(matches!(err, HostedUiError::NotConfigured("REDIRECT_SIGN_IN")));
}

#[test]
fn from_config_rejects_hostless_domain() {
    let cfg = IdentityConfig { domain: Some("https://".into()), ..test_config() };
    assert!(matches!(HostedUi::from_config(&cfg), Err(HostedUiError::InvalidDomain(_))));
}

#[test]
fn domain_without_scheme_defaults_to_https() {
    let ui = HostedUi::from_config(&test_config()).unwrap();
    assert_eq!(
        ui.token_url().as_str(),
        "https://demo.auth.ap-northeast-1.amazoncognito.com/oauth2/token"
    );
}

#[test]
fn domain_with_scheme_is_kept() {
    let cfg = IdentityConfig { domain: Some("http://localhost:9229".into()), ..test_config() };
    let ui = HostedUi::from_config(&cfg).unwrap();
    assert_eq!(ui.user_info_url().as_str(), "http://localhost:9229/oauth2/userInfo");
}

// =============================================================================
// URLs
// =============================================================================

#[test]
fn authorize_url_carries_code_flow_parameters() {
    let ui = HostedUi::from_config(&test_config()).unwrap();
    let url = ui.authorize_url("state-abc", "challenge-xyz", "ja");
    assert_eq!(url.path(), "/oauth2/authorize");

    let q = query_map(&url);
    assert_eq!(q["response_type"], "code");
    assert_eq!(q["client_id"], "client123");
    assert_eq!(q["redirect_uri"], "http://localhost:3000/auth/callback");
    assert_eq!(q["scope"], "email openid aws.cognito.signin.user.admin profile");
    assert_eq!(q["state"], "state-abc");
    assert_eq!(q["code_challenge"], "challenge-xyz");
    assert_eq!(q["code_challenge_method"], "S256");
    assert_eq!(q["lang"], "ja");
}

#[test]
fn logout_url_targets_sign_out_redirect() {
    let ui = HostedUi::from_config(&test_config()).unwrap();
    let url = ui.logout_url().expect("logout url");
    assert_eq!(url.path(), "/logout");
    let q = query_map(&url);
    assert_eq!(q["client_id"], "client123");
    assert_eq!(q["logout_uri"], "http://localhost:3000/");
}

#[test]
fn logout_url_absent_without_sign_out_redirect() {
    let cfg = IdentityConfig { redirect_sign_out: None, ..test_config() };
    let ui = HostedUi::from_config(&cfg).unwrap();
    assert!(ui.logout_url().is_none());
}

// =============================================================================
// PKCE
// =============================================================================

#[test]
fn pkce_challenge_matches_rfc7636_example() {
    assert_eq!(
        pkce_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
        "E9Melhoa2OwvFrEMTJguCHoeJCf4lmDBMDXZNZ8J6HM"
    );
}

#[test]
fn generate_verifier_is_43_url_safe_chars() {
    let verifier = generate_verifier();
    assert_eq!(verifier.len(), 43);
    assert!(
        verifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn generate_verifier_two_calls_differ() {
    assert_ne!(generate_verifier(), generate_verifier());
}

// =============================================================================
// TokenSet
// =============================================================================

#[test]
fn token_set_defaults_expiry() {
    let tokens: TokenSet = serde_json::from_str(r#"{"id_token":"i","access_token":"a","token_type":"Bearer"}"#).unwrap();
    assert_eq!(tokens.expires_in, DEFAULT_EXPIRES_IN_SECS);
}

#[test]
fn token_set_reads_expiry() {
    let tokens: TokenSet =
        serde_json::from_str(r#"{"id_token":"i","access_token":"a","refresh_token":"r","expires_in":300}"#).unwrap();
    assert_eq!(tokens.id_token, "i");
    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.expires_in, 300);
}

// =============================================================================
// attributes_from_claims
// =============================================================================

#[test]
fn attributes_keep_strings_and_stringify_others() {
    let claims = serde_json::json!({
        "email": "a@b.com",
        "email_verified": true,
        "custom:isAdmin": "true",
        "sub": "1234",
    });
    let serde_json::Value::Object(map) = claims else { unreachable!() };
    let attrs = attributes_from_claims(map);
    assert_eq!(attrs["email"], "a@b.com");
    assert_eq!(attrs["email_verified"], "true");
    assert_eq!(attrs["custom:isAdmin"], "true");
    assert_eq!(attrs["sub"], "1234");
}

// =============================================================================
// username_from_id_token
// =============================================================================

#[test]
fn username_prefers_cognito_username() {
    let token = jwt_with_payload(&serde_json::json!({"cognito:username": "alice", "sub": "uuid-1"}));
    assert_eq!(username_from_id_token(&token).unwrap(), "alice");
}

#[test]
fn username_falls_back_to_sub() {
    let token = jwt_with_payload(&serde_json::json!({"sub": "uuid-1"}));
    assert_eq!(username_from_id_token(&token).unwrap(), "uuid-1");
}

#[test]
fn username_missing_claims_is_error() {
    let token = jwt_with_payload(&serde_json::json!({"email": "a@b.com"}));
    assert!(matches!(username_from_id_token(&token), Err(HostedUiError::IdToken(_))));
}

#[test]
fn username_rejects_wrong_segment_count() {
    assert!(username_from_id_token("only.two").is_err());
    assert!(username_from_id_token("a.b.c.d").is_err());
}

#[test]
fn username_rejects_non_base64_payload() {
    assert!(username_from_id_token("h.!!!.s").is_err());
}
