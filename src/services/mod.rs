//! Identity-client adapter services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `hosted_ui` talks to the identity provider, `session` keeps the resulting
//! token pairs keyed by an opaque cookie token. Route handlers stay focused on
//! protocol translation and cookie plumbing.

pub mod hosted_ui;
pub mod session;
