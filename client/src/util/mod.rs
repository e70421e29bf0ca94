//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (the page URL) from page and
//! component logic so the parsing half stays testable off-browser.

pub mod query;
