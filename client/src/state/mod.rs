//! Shared reactive state for the login demo.

pub mod auth;
