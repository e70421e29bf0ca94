//! Networking modules for the identity endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` defines the client seam the reconciler
//! depends on, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
