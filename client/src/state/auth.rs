//! Auth view state and the reconciler that derives it from the identity client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shows exactly one of three screens: loading, the sign-in prompt,
//! or the signed-in profile. [`Reconciler`] asks the identity client what
//! session exists and turns the answer into a [`ViewState`]; [`AuthState`]
//! is the display state shared through Leptos context.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the page. A missing session is the normal
//! logged-out answer. A failed attribute fetch still yields `Authenticated`,
//! with an empty attribute map. Sign-in and sign-out failures become a
//! displayed message, and sign-out always lands on `Unauthenticated`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::{IdentityClient, IdentityError, SignInOptions};
use crate::net::types::{Attributes, SessionTokens};

/// Attribute holding the admin flag, compared against the string `"true"`.
pub const ADMIN_ATTRIBUTE: &str = "custom:isAdmin";

/// Profile of the signed-in user, rebuilt on every reconciliation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub attributes: Attributes,
}

impl UserProfile {
    /// Profile with no attributes, used when attribute enrichment fails.
    #[must_use]
    pub fn bare(username: String) -> Self {
        Self { username, attributes: Attributes::new() }
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.attribute("email").filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.attribute("name").filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.attribute(ADMIN_ATTRIBUTE) == Some("true")
    }
}

/// Which screen the page shows. Replaced wholesale, never patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated {
        profile: UserProfile,
        /// Absent when the identity client holds no tokens or enrichment failed.
        tokens: Option<SessionTokens>,
    },
}

impl ViewState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn tokens(&self) -> Option<&SessionTokens> {
        match self {
            Self::Authenticated { tokens, .. } => tokens.as_ref(),
            _ => None,
        }
    }
}

/// Description shown when the provider's callback error carries none.
pub const UNKNOWN_DESCRIPTION: &str = "unknown";

/// Error reported by the provider on the redirect back to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingError {
    pub code: String,
    pub description: String,
}

impl PendingError {
    #[must_use]
    pub fn message(&self) -> String {
        format!("Authentication error: {} ({})", self.code, self.description)
    }
}

/// Display state shared via context as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub view: ViewState,
    /// Error banner text, if any.
    pub message: Option<String>,
    /// Whether the raw ID token is revealed. Display only.
    pub show_token: bool,
}

impl AuthState {
    /// Initial state for a page load, showing any callback error from the URL.
    #[must_use]
    pub fn new(pending: Option<&PendingError>) -> Self {
        Self { message: pending.map(PendingError::message), ..Self::default() }
    }

    pub fn begin_reconcile(&mut self) {
        self.view = ViewState::Loading;
    }

    pub fn finish_reconcile(&mut self, view: ViewState) {
        if !view.is_authenticated() {
            self.show_token = false;
        }
        self.view = view;
    }

    /// Sign-in starts from a clean banner.
    pub fn begin_sign_in(&mut self) {
        self.message = None;
    }

    /// A failed redirect becomes a banner; the view is left alone.
    pub fn apply_sign_in(&mut self, result: Result<(), IdentityError>) {
        if let Err(e) = result {
            self.message = Some(format!("Sign-in error: {e}"));
        }
    }

    /// Always ends `Unauthenticated`, whatever the invalidation call returned.
    pub fn apply_sign_out(&mut self, result: Result<(), IdentityError>) {
        self.view = ViewState::Unauthenticated;
        self.show_token = false;
        if let Err(e) = result {
            self.message = Some(format!("Sign-out error: {e}"));
        }
    }

    pub fn toggle_token(&mut self) {
        self.show_token = !self.show_token;
    }
}

/// Derives [`ViewState`] from an [`IdentityClient`] and drives sign-in/out.
///
/// Calls are strictly sequential. Overlapping `reconcile` passes are not
/// deduplicated; whichever finishes last wins when applied to `AuthState`.
pub struct Reconciler<I> {
    client: I,
    options: SignInOptions,
}

impl<I: IdentityClient> Reconciler<I> {
    #[must_use]
    pub fn new(client: I, options: SignInOptions) -> Self {
        Self { client, options }
    }

    /// Ask the identity client for the current session and build the view.
    ///
    /// Never returns `Loading`.
    pub async fn reconcile(&self) -> ViewState {
        let identity = match self.client.current_session_identity().await {
            Ok(identity) => identity,
            Err(e) => {
                log::info!("no authenticated session: {e}");
                return ViewState::Unauthenticated;
            }
        };

        // TODO: surface enrichment failure as a distinct degraded state once the
        // profile card can explain missing scopes.
        match self.client.fetch_profile_attributes().await {
            Ok(attributes) => {
                let tokens = self.client.fetch_session_tokens().await;
                ViewState::Authenticated { profile: UserProfile { username: identity.username, attributes }, tokens }
            }
            Err(e) => {
                log::error!("profile attribute fetch failed for {}: {e}", identity.username);
                ViewState::Authenticated { profile: UserProfile::bare(identity.username), tokens: None }
            }
        }
    }

    /// Hand off to the hosted login page.
    ///
    /// # Errors
    ///
    /// Returns the identity client's error when the redirect could not start.
    pub async fn sign_in(&self) -> Result<(), IdentityError> {
        log::info!("redirecting to hosted login");
        self.client
            .begin_redirect_sign_in(&self.options)
            .await
            .inspect_err(|e| log::error!("sign-in redirect failed: {e}"))
    }

    /// Invalidate the session. Apply the result with [`AuthState::apply_sign_out`].
    ///
    /// # Errors
    ///
    /// Returns the identity client's error when invalidation failed.
    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        match self.client.end_session().await {
            Ok(()) => {
                log::info!("signed out");
                Ok(())
            }
            Err(e) => {
                log::error!("sign-out failed: {e}");
                Err(e)
            }
        }
    }
}
