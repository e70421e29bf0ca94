//! REST helpers for the server's identity endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting [`IdentityError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::identity::IdentityError;
use super::types::{Attributes, ConfigSummary, SessionIdentity, SessionTokens, SignOutResponse};

#[cfg(any(test, feature = "hydrate"))]
const ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
const ATTRIBUTES_ENDPOINT: &str = "/api/auth/attributes";
#[cfg(any(test, feature = "hydrate"))]
const TOKENS_ENDPOINT: &str = "/api/auth/tokens";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_URL_ENDPOINT: &str = "/api/auth/signin-url";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_OUT_ENDPOINT: &str = "/api/auth/signout";
#[cfg(any(test, feature = "hydrate"))]
const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_url_endpoint(language: Option<&str>) -> String {
    let Some(lang) = language.map(str::trim).filter(|lang| !lang.is_empty()) else {
        return SIGN_IN_URL_ENDPOINT.to_owned();
    };
    match serde_urlencoded::to_string([("lang", lang)]) {
        Ok(query) => format!("{SIGN_IN_URL_ENDPOINT}?{query}"),
        Err(_) => SIGN_IN_URL_ENDPOINT.to_owned(),
    }
}

/// Map a non-OK status to the identity error the reconciler understands.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> IdentityError {
    match status {
        401 => IdentityError::NoSession,
        503 => IdentityError::Unavailable,
        other => IdentityError::Status(other),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, IdentityError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| IdentityError::Parse(e.to_string()))
}

/// Fetch the current session identity from `/api/auth/me`.
///
/// # Errors
///
/// [`IdentityError::NoSession`] when the server reports no session.
pub async fn fetch_current_identity() -> Result<SessionIdentity, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<SessionIdentity>(ME_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Fetch profile attributes from `/api/auth/attributes`.
///
/// # Errors
///
/// Returns an error if the request fails or the provider's user info is unavailable.
pub async fn fetch_profile_attributes() -> Result<Attributes, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Attributes>(ATTRIBUTES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Fetch the session's token pair from `/api/auth/tokens`.
/// Returns `None` without a session or on the server.
pub async fn fetch_session_tokens() -> Option<SessionTokens> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<SessionTokens>(TOKENS_ENDPOINT).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ask the server for the hosted login URL via `GET /api/auth/signin-url`.
///
/// # Errors
///
/// [`IdentityError::Unavailable`] when the provider is not configured.
pub async fn fetch_sign_in_url(language: Option<&str>) -> Result<String, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json::<super::types::SignInUrl>(&sign_in_url_endpoint(language)).await?;
        Ok(body.url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
        Err(IdentityError::Unavailable)
    }
}

/// End the session via `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn sign_out() -> Result<SignOutResponse, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<SignOutResponse>()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Fetch the diagnostic configuration summary from `/api/config`.
pub async fn fetch_config_summary() -> Option<ConfigSummary> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<ConfigSummary>(CONFIG_ENDPOINT).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
