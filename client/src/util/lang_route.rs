//! Two-letter language suffix in the page URL (`/en`, `/zh`).

#[cfg(test)]
#[path = "lang_route_test.rs"]
mod lang_route_test;

use rubric::Language;

/// Language suffixes the router serves besides `/`.
pub const LANGUAGE_SEGMENTS: [&str; 2] = ["en", "zh"];

/// Language for a path segment; unknown or absent segments use the default
/// language.
pub fn language_from_segment(segment: Option<&str>) -> Language {
    segment.and_then(Language::from_code).unwrap_or_default()
}

/// Language for a page pathname such as `/en` or `/zh/`.
pub fn language_from_path(path: &str) -> Language {
    language_from_segment(path.split('/').find(|s| !s.is_empty()))
}

/// Page path that selects `lang`.
pub fn path_for_language(lang: Language) -> String {
    format!("/{}", lang.code())
}
