//! Fixed-position Chinese/English switch.
//!
//! Switching navigates to the other language suffix; the document resource
//! lives above the router, so nothing is refetched.

#[cfg(test)]
#[path = "language_toggle_test.rs"]
mod language_toggle_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use rubric::Language;
use rubric::i18n::translate;

use crate::state::language::use_language;
use crate::util::analytics;
use crate::util::lang_route::path_for_language;

/// Button text names the language you would switch to.
pub fn toggle_label(current: Language) -> &'static str {
    match current {
        Language::Zh => "EN",
        Language::En => "中文",
    }
}

pub fn toggle_title_key(current: Language) -> &'static str {
    match current {
        Language::Zh => "switch.to.english",
        Language::En => "switch.to.chinese",
    }
}

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let lang = use_language();
    let navigate = use_navigate();

    let on_click = move |_| {
        let from = lang.get_untracked();
        let to = from.toggled();
        analytics::dispatch(&analytics::language_toggle(from, to));
        navigate(&path_for_language(to), NavigateOptions::default());
    };

    view! {
        <div class="language-toggle">
            <svg class="language-toggle__icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true">
                <circle cx="12" cy="12" r="9"></circle>
                <path d="M3 12h18M12 3c2.5 2.7 3.75 5.7 3.75 9S14.5 18.3 12 21M12 3C9.5 5.7 8.25 8.7 8.25 12S9.5 18.3 12 21"></path>
            </svg>
            <button
                class="language-toggle__button"
                on:click=on_click
                title=move || translate(lang.get(), toggle_title_key(lang.get()))
                aria-label=move || translate(lang.get(), "language.switch")
            >
                {move || toggle_label(lang.get())}
            </button>
        </div>
    }
}
