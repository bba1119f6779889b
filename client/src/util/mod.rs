//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (URL language suffix, analytics
//! script) from page and component logic so the pure parts stay testable.

pub mod analytics;
pub mod lang_route;
