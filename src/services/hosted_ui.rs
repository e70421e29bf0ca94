//! Hosted login service — authorize URL, PKCE, code exchange, user info.
//!
//! ARCHITECTURE
//! ============
//! The browser never calls the provider's token endpoint. The server builds
//! the authorize URL, keeps the PKCE verifier in an HttpOnly cookie, and
//! trades the returned code for tokens on the callback.
//!
//! ID-token claims are decoded only to read the username. Signatures are not
//! verified here; the provider issued the token over TLS to this server.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::{IdentityConfig, SCOPES};

/// Token lifetime assumed when the provider omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum HostedUiError {
    #[error("identity provider not configured: {0} missing")]
    NotConfigured(&'static str),
    #[error("invalid hosted login domain: {0}")]
    InvalidDomain(String),
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("user info request failed: {0}")]
    UserInfo(String),
    #[error("malformed id token: {0}")]
    IdToken(String),
}

/// Endpoints of the provider's hosted login domain plus the app client settings.
#[derive(Debug, Clone)]
pub struct HostedUi {
    base: Url,
    client_id: String,
    redirect_sign_in: String,
    redirect_sign_out: Option<String>,
}

impl HostedUi {
    /// Build from config. Requires domain, client id and redirect-on-signin URL.
    ///
    /// # Errors
    ///
    /// Returns [`HostedUiError::NotConfigured`] naming the first missing variable,
    /// or [`HostedUiError::InvalidDomain`] if the domain does not parse as a URL.
    pub fn from_config(config: &IdentityConfig) -> Result<Self, HostedUiError> {
        let domain = config
            .domain
            .as_deref()
            .ok_or(HostedUiError::NotConfigured("COGNITO_DOMAIN"))?;
        let client_id = config
            .client_id
            .clone()
            .ok_or(HostedUiError::NotConfigured("USER_POOL_CLIENT_ID"))?;
        let redirect_sign_in = config
            .redirect_sign_in
            .clone()
            .ok_or(HostedUiError::NotConfigured("REDIRECT_SIGN_IN"))?;
        let base = parse_domain(domain)?;
        Ok(Self { base, client_id, redirect_sign_in, redirect_sign_out: config.redirect_sign_out.clone() })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }

    /// Authorization-code request with PKCE (S256) and the language hint.
    #[must_use]
    pub fn authorize_url(&self, state: &str, code_challenge: &str, language: &str) -> Url {
        let mut url = self.endpoint("/oauth2/authorize");
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_sign_in)
            .append_pair("scope", &SCOPES.join(" "))
            .append_pair("state", state)
            .append_pair("code_challenge", code_challenge)
            .append_pair("code_challenge_method", "S256")
            .append_pair("lang", language);
        url
    }

    #[must_use]
    pub fn token_url(&self) -> Url {
        self.endpoint("/oauth2/token")
    }

    #[must_use]
    pub fn user_info_url(&self) -> Url {
        self.endpoint("/oauth2/userInfo")
    }

    /// Hosted logout URL, or `None` without a redirect-on-signout URL.
    #[must_use]
    pub fn logout_url(&self) -> Option<Url> {
        let logout_uri = self.redirect_sign_out.as_deref()?;
        let mut url = self.endpoint("/logout");
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("logout_uri", logout_uri);
        Some(url)
    }
}

fn parse_domain(raw: &str) -> Result<Url, HostedUiError> {
    let with_scheme = if raw.starts_with("https://") || raw.starts_with("http://") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    };
    let url = Url::parse(&with_scheme).map_err(|e| HostedUiError::InvalidDomain(format!("{raw}: {e}")))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(HostedUiError::InvalidDomain(raw.to_owned()));
    }
    Ok(url)
}

// =============================================================================
// PKCE
// =============================================================================

/// Generate a 43-character base64url PKCE code verifier.
#[must_use]
pub fn generate_verifier() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// S256 code challenge for a verifier.
#[must_use]
pub fn pkce_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

// =============================================================================
// TOKEN EXCHANGE
// =============================================================================

/// Token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSet {
    pub id_token: String,
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    DEFAULT_EXPIRES_IN_SECS
}

/// Exchange an authorization code (plus PKCE verifier) for tokens.
///
/// # Errors
///
/// Returns [`HostedUiError::TokenExchange`] on transport failure, non-success
/// status, or an unparseable response body.
pub async fn exchange_code(
    http: &reqwest::Client,
    ui: &HostedUi,
    code: &str,
    verifier: &str,
) -> Result<TokenSet, HostedUiError> {
    let resp = http
        .post(ui.token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", ui.client_id.as_str()),
            ("code", code),
            ("redirect_uri", ui.redirect_sign_in.as_str()),
            ("code_verifier", verifier),
        ])
        .send()
        .await
        .map_err(|e| HostedUiError::TokenExchange(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(HostedUiError::TokenExchange(format!("{status}: {body}")));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| HostedUiError::TokenExchange(e.to_string()))?;
    serde_json::from_str(&body).map_err(|_| HostedUiError::TokenExchange(format!("unexpected response: {body}")))
}

/// Fetch the user's attributes from the `userInfo` endpoint.
///
/// # Errors
///
/// Returns [`HostedUiError::UserInfo`] on transport failure, non-success
/// status, or a body that is not a JSON object.
pub async fn fetch_user_info(
    http: &reqwest::Client,
    ui: &HostedUi,
    access_token: &str,
) -> Result<BTreeMap<String, String>, HostedUiError> {
    let resp = http
        .get(ui.user_info_url())
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| HostedUiError::UserInfo(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(HostedUiError::UserInfo(format!("{status}: {body}")));
    }

    let claims = resp
        .json::<serde_json::Map<String, serde_json::Value>>()
        .await
        .map_err(|e| HostedUiError::UserInfo(e.to_string()))?;
    Ok(attributes_from_claims(claims))
}

/// Flatten JSON claims to strings. Non-string values keep their JSON text.
pub(crate) fn attributes_from_claims(claims: serde_json::Map<String, serde_json::Value>) -> BTreeMap<String, String> {
    claims
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}

#[derive(Deserialize)]
struct IdTokenClaims {
    #[serde(rename = "cognito:username")]
    username: Option<String>,
    sub: Option<String>,
}

/// Read the username from an ID token payload (`cognito:username`, else `sub`).
///
/// # Errors
///
/// Returns [`HostedUiError::IdToken`] if the token is not a three-part JWT,
/// the payload is not base64url JSON, or neither claim is present.
pub fn username_from_id_token(id_token: &str) -> Result<String, HostedUiError> {
    let mut parts = id_token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(HostedUiError::IdToken("expected three segments".into()));
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| HostedUiError::IdToken(e.to_string()))?;
    let claims: IdTokenClaims = serde_json::from_slice(&bytes).map_err(|e| HostedUiError::IdToken(e.to_string()))?;
    claims
        .username
        .or(claims.sub)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HostedUiError::IdToken("no username or sub claim".into()))
}

#[cfg(test)]
#[path = "hosted_ui_test.rs"]
mod tests;
