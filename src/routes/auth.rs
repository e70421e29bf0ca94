//! Auth routes — hosted login redirect, callback, session queries, sign-out.
//!
//! These endpoints are the identity client the browser talks to: the page
//! never sees an authorization code or the PKCE verifier, only the results
//! the reconciler asks for.

use std::collections::BTreeMap;

use axum::extract::{FromRef, FromRequestParts, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::hosted_ui::{self, HostedUi};
use crate::services::session::{self, StoredSession};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
const PKCE_VERIFIER_COOKIE_NAME: &str = "pkce_verifier";
const LOGIN_COOKIE_MINUTES: i64 = 10;

fn cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn login_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    let mut c = cookie(name, value, secure);
    c.set_max_age(Duration::minutes(LOGIN_COOKIE_MINUTES));
    c
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut c = cookie(name, String::new(), secure);
    c.set_max_age(Duration::ZERO);
    c
}

fn clear_login_cookies(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure))
        .add(expired_cookie(PKCE_VERIFIER_COOKIE_NAME, secure))
}

/// Page location carrying a callback error the way the provider reports one.
pub(crate) fn error_location(code: &str, description: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("error", code);
    if let Some(description) = description {
        query.append_pair("error_description", description);
    }
    format!("/?{}", query.finish())
}

fn error_redirect(jar: CookieJar, secure: bool, code: &str, description: Option<&str>) -> Response {
    (clear_login_cookies(jar, secure), Redirect::temporary(&error_location(code, description))).into_response()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Live session resolved from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthSession {
    pub session: StoredSession,
}

impl<S> FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .get(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { session })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct SignInQuery {
    lang: Option<String>,
}

#[derive(Serialize)]
struct SignInUrlResponse {
    url: String,
}

/// `GET /api/auth/signin-url` — hosted login URL for the browser to navigate to.
///
/// Sets short-lived `oauth_state` and `pkce_verifier` cookies checked by the callback.
pub async fn signin_url(State(state): State<AppState>, Query(params): Query<SignInQuery>) -> Response {
    let Some(ui) = state.hosted_ui.as_deref() else {
        return (StatusCode::SERVICE_UNAVAILABLE, "identity provider not configured").into_response();
    };
    let secure = state.config.cookie_secure;

    let oauth_state = session::generate_token();
    let verifier = hosted_ui::generate_verifier();
    let language = params
        .lang
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| state.config.sign_in_language.clone());
    let url = ui.authorize_url(&oauth_state, &hosted_ui::pkce_challenge(&verifier), &language);

    let jar = CookieJar::new()
        .add(login_cookie(OAUTH_STATE_COOKIE_NAME, oauth_state, secure))
        .add(login_cookie(PKCE_VERIFIER_COOKIE_NAME, verifier, secure));

    tracing::info!(%language, "issued hosted login url");
    (jar, Json(SignInUrlResponse { url: url.into() })).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// `GET /auth/callback` — registered redirect-on-signin URL.
///
/// Provider errors are forwarded to `/` untouched. A code with a matching
/// state is exchanged, the session stored, and the browser sent back to `/`.
pub async fn callback(State(state): State<AppState>, jar: CookieJar, Query(params): Query<CallbackQuery>) -> Response {
    let secure = state.config.cookie_secure;

    if let Some(error) = params.error.as_deref() {
        let description = params.error_description.as_deref();
        tracing::warn!(error, description = description.unwrap_or_default(), "identity provider returned an error");
        return error_redirect(jar, secure, error, description);
    }

    let Some(ui) = state.hosted_ui.as_deref() else {
        return error_redirect(jar, secure, "not_configured", Some("identity provider not configured"));
    };
    let Some(code) = params.code.as_deref().filter(|code| !code.is_empty()) else {
        return error_redirect(jar, secure, "invalid_request", Some("missing authorization code"));
    };

    // Verify OAuth CSRF state from cookie.
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();
    let verifier = jar
        .get(PKCE_VERIFIER_COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();
    if expected_state.is_empty() || params.state.as_deref() != Some(expected_state.as_str()) || verifier.is_empty() {
        tracing::warn!("oauth state mismatch on callback");
        return error_redirect(jar, secure, "invalid_state", Some("login state mismatch"));
    }

    let tokens = match hosted_ui::exchange_code(&state.http, ui, code, &verifier).await {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return error_redirect(jar, secure, "token_exchange_failed", Some("could not exchange authorization code"));
        }
    };

    let username = match hosted_ui::username_from_id_token(&tokens.id_token) {
        Ok(name) => name,
        Err(e) => {
            tracing::error!(error = %e, "id token unreadable");
            return error_redirect(jar, secure, "invalid_token", Some("identity token could not be read"));
        }
    };

    let token = state
        .sessions
        .create(StoredSession::new(username.clone(), tokens.id_token, tokens.access_token, tokens.expires_in))
        .await;
    tracing::info!(%username, "session created");

    let jar = clear_login_cookies(jar, secure).add(cookie(COOKIE_NAME, token, secure));
    (jar, Redirect::temporary("/")).into_response()
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub username: String,
}

/// `GET /api/auth/me` — current session identity.
pub async fn me(auth: AuthSession) -> Json<IdentityResponse> {
    Json(IdentityResponse { username: auth.session.username })
}

/// `GET /api/auth/attributes` — profile attributes from the provider's `userInfo`.
pub async fn attributes(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<BTreeMap<String, String>>, StatusCode> {
    let Some(ui) = state.hosted_ui.as_deref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };
    hosted_ui::fetch_user_info(&state.http, ui, &auth.session.access_token)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, username = %auth.session.username, "user info fetch failed");
            StatusCode::BAD_GATEWAY
        })
}

#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub id_token: String,
    pub access_token: String,
}

/// `GET /api/auth/tokens` — the session's token pair.
pub async fn tokens(auth: AuthSession) -> Json<TokensResponse> {
    Json(TokensResponse { id_token: auth.session.id_token, access_token: auth.session.access_token })
}

#[derive(Debug, Serialize)]
pub struct SignOutResponse {
    pub logout_url: Option<String>,
}

/// `POST /api/auth/signout` — drop the session, clear the cookie, hand back the hosted logout URL.
///
/// Succeeds whether or not a session existed.
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let secure = state.config.cookie_secure;
    let token = jar
        .get(COOKIE_NAME)
        .map(|c| c.value().to_owned())
        .unwrap_or_default();
    if !token.is_empty() && state.sessions.remove(&token).await {
        tracing::info!("session removed");
    }

    let logout_url = state
        .hosted_ui
        .as_deref()
        .and_then(HostedUi::logout_url)
        .map(String::from);

    (jar.add(expired_cookie(COOKIE_NAME, secure)), Json(SignOutResponse { logout_url }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
