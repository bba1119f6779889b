//! Dashboard page: loading state, header, donut, levels, and footer.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::{Html, Title};
use leptos_router::hooks::use_location;
use rubric::i18n::translate;
use rubric::{Document, Language, LocalizedText};

use crate::app::DocumentResource;
use crate::components::language_toggle::LanguageToggle;
use crate::components::level_section::LevelSection;
use crate::components::overall_score::{OverallScore, level_summaries};
use crate::state::language::{CurrentLanguage, use_language};
use crate::util::lang_route::language_from_path;

/// Document text, or the dictionary entry for `fallback_key` when the data
/// file leaves it blank.
pub fn text_or_default(lang: Language, text: &LocalizedText, fallback_key: &str) -> String {
    if text.is_empty() {
        translate(lang, fallback_key).to_owned()
    } else {
        text.resolve(lang).to_owned()
    }
}

/// Footer entries as (dictionary key, value), skipping blank values.
pub fn footer_entries(version: &str, author: &str, license: &str) -> Vec<(&'static str, String)> {
    [("version", version), ("author", author), ("license", license)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key, value.trim().to_owned()))
        .collect()
}

/// Whole seconds between two `Date.now()` readings.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_seconds(start_ms: f64, now_ms: f64) -> u64 {
    ((now_ms - start_ms).max(0.0) / 1000.0).round() as u64
}

/// Dashboard page. Shows the loading text until the document arrives; a
/// failed fetch never leaves that state.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let location = use_location();
    let lang = Signal::derive(move || location.pathname.with(|path| language_from_path(path)));
    provide_context(CurrentLanguage(lang));

    let document = expect_context::<DocumentResource>();
    track_time_on_page();

    view! {
        <Html attr:lang=move || lang.get().html_lang()/>
        <Title text=move || translate(lang.get(), "site.title")/>
        <LanguageToggle/>
        {move || match document.get().flatten() {
            Some(doc) => view! { <Dashboard doc=doc/> }.into_any(),
            None => {
                view! { <div class="dashboard__loading">{move || translate(lang.get(), "loading")}</div> }
                    .into_any()
            }
        }}
    }
}

#[component]
fn Dashboard(doc: Document) -> impl IntoView {
    let lang = use_language();
    let summaries = level_summaries(&doc);
    let overall = doc.overall_score();
    let weights = doc.level_weights();
    let footer = footer_entries(&doc.version, &doc.author, &doc.license);
    let Document { name, description, levels, .. } = doc;

    let sections = levels
        .into_iter()
        .zip(weights)
        .map(|(level, weight)| view! { <LevelSection level=level weight=weight/> })
        .collect_view();

    let footer_items = footer
        .into_iter()
        .map(|(key, value)| {
            view! {
                <span class="dashboard__footer-item">
                    {move || translate(lang.get(), key)}
                    ": "
                    {value}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">{move || text_or_default(lang.get(), &name, "site.title")}</h1>
                <p class="dashboard__description">
                    {move || text_or_default(lang.get(), &description, "site.description")}
                </p>
            </header>
            <OverallScore levels=summaries overall=overall/>
            <main class="dashboard__levels">{sections}</main>
            <footer class="dashboard__footer">{footer_items}</footer>
        </div>
    }
}

/// Report time on page when the tab is closed or navigated away.
fn track_time_on_page() {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::analytics;

        let started_ms = js_sys::Date::now();
        let handle = window_event_listener(leptos::ev::beforeunload, move |_| {
            let seconds = elapsed_seconds(started_ms, js_sys::Date::now());
            analytics::dispatch(&analytics::time_on_page(seconds));
        });
        on_cleanup(move || handle.remove());
    }
}
