//! Identity client seam consumed by the auth reconciler.
//!
//! ARCHITECTURE
//! ============
//! The reconciler only ever talks to [`IdentityClient`]. The browser build
//! plugs in [`HttpIdentityClient`], backed by the server's `/api/auth/*`
//! endpoints; tests plug in fakes. Futures are `?Send` because browser tasks
//! run on the single-threaded event loop.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use super::api;
use super::types::{Attributes, SessionIdentity, SessionTokens};

/// Failures reported by an identity client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// No session exists, or it expired. The normal logged-out answer.
    #[error("no current session")]
    NoSession,
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    /// The identity provider is not configured or not reachable from here.
    #[error("identity provider unavailable")]
    Unavailable,
}

/// Options forwarded to the hosted login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInOptions {
    /// Hosted login language. `None` defers to the server's configured default.
    pub language: Option<String>,
}

/// Session operations provided by the identity library.
#[async_trait(?Send)]
pub trait IdentityClient {
    /// Identity of the current session.
    ///
    /// # Errors
    ///
    /// [`IdentityError::NoSession`] when logged out; other variants when the
    /// lookup itself failed.
    async fn current_session_identity(&self) -> Result<SessionIdentity, IdentityError>;

    /// Profile attributes of the signed-in user.
    ///
    /// # Errors
    ///
    /// Any variant when the attributes cannot be fetched.
    async fn fetch_profile_attributes(&self) -> Result<Attributes, IdentityError>;

    /// Token pair of the current session, if one is held.
    async fn fetch_session_tokens(&self) -> Option<SessionTokens>;

    /// Navigate to the hosted login page. Only returns early on failure.
    ///
    /// # Errors
    ///
    /// Any variant when the redirect could not be started.
    async fn begin_redirect_sign_in(&self, options: &SignInOptions) -> Result<(), IdentityError>;

    /// Invalidate the current session.
    ///
    /// # Errors
    ///
    /// Any variant when the invalidation call failed.
    async fn end_session(&self) -> Result<(), IdentityError>;
}

/// [`IdentityClient`] backed by the server's identity endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpIdentityClient;

#[async_trait(?Send)]
impl IdentityClient for HttpIdentityClient {
    async fn current_session_identity(&self) -> Result<SessionIdentity, IdentityError> {
        api::fetch_current_identity().await
    }

    async fn fetch_profile_attributes(&self) -> Result<Attributes, IdentityError> {
        api::fetch_profile_attributes().await
    }

    async fn fetch_session_tokens(&self) -> Option<SessionTokens> {
        api::fetch_session_tokens().await
    }

    async fn begin_redirect_sign_in(&self, options: &SignInOptions) -> Result<(), IdentityError> {
        // Resolve the URL first so a misconfigured provider fails before navigation.
        let url = api::fetch_sign_in_url(options.language.as_deref()).await?;
        navigate(&url)
    }

    async fn end_session(&self) -> Result<(), IdentityError> {
        let response = api::sign_out().await?;
        if let Some(logout_url) = response.logout_url {
            navigate(&logout_url)?;
        }
        Ok(())
    }
}

/// Send the browser to `url`.
fn navigate(url: &str) -> Result<(), IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(IdentityError::Unavailable)?;
        window
            .location()
            .set_href(url)
            .map_err(|_| IdentityError::Request(format!("navigation to {url} failed")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(IdentityError::Unavailable)
    }
}
