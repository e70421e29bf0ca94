//! Reusable view components for the login demo.
//!
//! ARCHITECTURE
//! ============
//! Components render from `RwSignal<AuthState>` and report user intent through
//! callbacks. The page owns every call into the reconciler.

pub mod config_panel;
pub mod error_banner;
pub mod profile_card;
pub mod sign_in_card;
pub mod token_inspector;
