//! Wire DTOs for the identity-client endpoints.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON responses field for field. Attribute maps
//! are ordered so rendering is deterministic across reloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Profile attributes keyed by attribute name (`email`, `name`, `custom:*`, ...).
pub type Attributes = BTreeMap<String, String>;

/// Identity of the current session as reported by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub username: String,
}

/// Opaque bearer credentials held for the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub id_token: String,
    pub access_token: String,
}

/// Diagnostic view of the server's identity configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
    pub domain: String,
    pub redirect_sign_in: String,
}

/// Response of `/api/auth/signin-url`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInUrl {
    pub url: String,
}

/// Response of `/api/auth/signout`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignOutResponse {
    /// Hosted logout page to visit, when the provider has one configured.
    #[serde(default)]
    pub logout_url: Option<String>,
}
