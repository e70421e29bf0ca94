//! Identity-provider configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Built exactly once in `main` and shared through `AppState`. Every value is
//! optional: a missing value renders as "not configured" in the diagnostics
//! panel and disables only the endpoints that depend on it.

use serde::Serialize;

pub const DEFAULT_SIGN_IN_LANGUAGE: &str = "ja";
pub const DEFAULT_PORT: u16 = 3000;

/// Scopes requested from the hosted login page.
pub const SCOPES: [&str; 4] = ["email", "openid", "aws.cognito.signin.user.admin", "profile"];

pub const CONFIGURED: &str = "configured";
pub const NOT_CONFIGURED: &str = "not configured";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    pub region: Option<String>,
    pub user_pool_id: Option<String>,
    pub client_id: Option<String>,
    /// Hosted login domain, with or without a scheme.
    pub domain: Option<String>,
    pub redirect_sign_in: Option<String>,
    pub redirect_sign_out: Option<String>,
    pub sign_in_language: String,
    pub cookie_secure: bool,
}

/// Diagnostic view of [`IdentityConfig`] served at `/api/config`.
///
/// Identifiers are reported only as configured / not configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
    pub domain: String,
    pub redirect_sign_in: String,
}

impl IdentityConfig {
    /// Build typed identity config from the process environment.
    ///
    /// All optional:
    /// - `REGION`, `USER_POOL_ID`, `USER_POOL_CLIENT_ID`, `COGNITO_DOMAIN`
    /// - `REDIRECT_SIGN_IN`, `REDIRECT_SIGN_OUT`
    /// - `SIGN_IN_LANGUAGE`: default `ja`
    /// - `COOKIE_SECURE`: default true when `REDIRECT_SIGN_IN` is https
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
        };

        let redirect_sign_in = value("REDIRECT_SIGN_IN");
        let cookie_secure = value("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or_else(|| {
                redirect_sign_in
                    .as_deref()
                    .is_some_and(|uri| uri.starts_with("https://"))
            });

        Self {
            region: value("REGION"),
            user_pool_id: value("USER_POOL_ID"),
            client_id: value("USER_POOL_CLIENT_ID"),
            domain: value("COGNITO_DOMAIN"),
            redirect_sign_in,
            redirect_sign_out: value("REDIRECT_SIGN_OUT"),
            sign_in_language: value("SIGN_IN_LANGUAGE").unwrap_or_else(|| DEFAULT_SIGN_IN_LANGUAGE.to_owned()),
            cookie_secure,
        }
    }

    #[must_use]
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            region: shown(self.region.as_deref()),
            user_pool_id: presence(self.user_pool_id.as_deref()),
            client_id: presence(self.client_id.as_deref()),
            domain: presence(self.domain.as_deref()),
            redirect_sign_in: shown(self.redirect_sign_in.as_deref()),
        }
    }
}

fn shown(value: Option<&str>) -> String {
    value.unwrap_or(NOT_CONFIGURED).to_owned()
}

fn presence(value: Option<&str>) -> String {
    let label = if value.is_some() { CONFIGURED } else { NOT_CONFIGURED };
    label.to_owned()
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Listen port from `PORT`, falling back to [`DEFAULT_PORT`] when unset or invalid.
#[must_use]
pub fn port_from_env() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
