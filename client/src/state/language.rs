//! Display language, derived from the page pathname (`/`, `/en`, `/zh`).

use leptos::prelude::*;
use rubric::Language;

/// Context wrapper so the language signal has a distinct context type.
#[derive(Clone, Copy)]
pub struct CurrentLanguage(pub Signal<Language>);

/// Read the current language from context.
///
/// # Panics
///
/// Panics if called outside the dashboard page, which provides it.
pub fn use_language() -> Signal<Language> {
    expect_context::<CurrentLanguage>().0
}
