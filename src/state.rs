//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the identity config parsed once at start-up, the hosted login
//! endpoints derived from it (absent when the provider is not configured),
//! the session store, and one pooled HTTP client for provider calls.

use std::sync::Arc;

use crate::config::IdentityConfig;
use crate::services::hosted_ui::HostedUi;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<IdentityConfig>,
    /// `None` when domain, client id or redirect URL is missing.
    pub hosted_ui: Option<Arc<HostedUi>>,
    pub sessions: SessionStore,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        let hosted_ui = match HostedUi::from_config(&config) {
            Ok(ui) => Some(Arc::new(ui)),
            Err(e) => {
                tracing::warn!(error = %e, "hosted login disabled");
                None
            }
        };
        Self { config: Arc::new(config), hosted_ui, sessions: SessionStore::new(), http: reqwest::Client::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Config with every hosted-login value set to a local test value.
    #[must_use]
    pub fn configured() -> IdentityConfig {
        IdentityConfig {
            region: Some("ap-northeast-1".into()),
            user_pool_id: Some("ap-northeast-1_test".into()),
            client_id: Some("client123".into()),
            domain: Some("demo.auth.ap-northeast-1.amazoncognito.com".into()),
            redirect_sign_in: Some("http://localhost:3000/auth/callback".into()),
            redirect_sign_out: Some("http://localhost:3000/".into()),
            sign_in_language: "ja".into(),
            cookie_secure: false,
        }
    }

    /// `AppState` with hosted login configured (no network is touched).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(configured())
    }

    /// `AppState` with nothing configured.
    #[must_use]
    pub fn unconfigured_app_state() -> AppState {
        AppState::new(IdentityConfig::default())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
