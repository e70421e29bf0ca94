//! Page query-string helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider reports login failures by redirecting back with `error` and
//! `error_description` query parameters. The page reads them once at start-up
//! and never rewrites the URL.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::state::auth::{PendingError, UNKNOWN_DESCRIPTION};

/// Parse a callback error from a query string (with or without the leading `?`).
///
/// Repeated keys keep their first value. Returns `None` when `error` is absent
/// or empty, or the query is malformed.
pub fn parse_pending_error(search: &str) -> Option<PendingError> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let params: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    let first = |key: &str| {
        params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    };
    let code = first("error").filter(|code| !code.is_empty())?.to_owned();
    let description = first("error_description")
        .filter(|description| !description.is_empty())
        .unwrap_or(UNKNOWN_DESCRIPTION)
        .to_owned();
    Some(PendingError { code, description })
}

/// Read the callback error from the current page URL.
/// Always `None` outside the browser.
pub fn read_pending_error() -> Option<PendingError> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        parse_pending_error(&search)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
