//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The dashboard has two pieces of state: transient UI toggles
//! (`dashboard`) and the display language derived from the URL
//! (`language`). Both are provided through Leptos context.

pub mod dashboard;
pub mod language;
