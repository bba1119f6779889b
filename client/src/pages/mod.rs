//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! There is one page. It owns the language derived from the URL and
//! delegates rendering details to `components`.

pub mod dashboard;
