//! A single supporting paper inside an open metric card.

use leptos::prelude::*;
use rubric::i18n::translate;
use rubric::{Language, Paper};

use crate::components::overall_score::format_score;
use crate::components::star_rating::StarRating;
use crate::state::language::use_language;
use crate::util::analytics;

#[component]
pub fn PaperRow(paper: Paper, metric_id: String, level_name: String) -> impl IntoView {
    let lang = use_language();
    let support = paper.support_score();
    let title_en = paper.title.resolve(Language::En).to_owned();
    let Paper { title, url, core_argument, notes, .. } = paper;
    let has_notes = !notes.is_empty();

    let title_text = move || title.resolve(lang.get()).to_owned();
    let heading = if url.trim().is_empty() {
        view! { <span class="paper__title">{title_text}</span> }.into_any()
    } else {
        let on_click = {
            let url = url.clone();
            move |_| analytics::dispatch_all(&analytics::paper_click(&title_en, &url, &metric_id, &level_name))
        };
        view! {
            <a class="paper__title" href=url target="_blank" rel="noopener noreferrer" on:click=on_click>
                {title_text}
            </a>
        }
        .into_any()
    };

    view! {
        <div class="paper">
            <div class="paper__header">
                {heading}
                <span class="paper__support" title=move || translate(lang.get(), "support.level")>
                    <StarRating support=support.unwrap_or(0.0)/>
                    <span class="paper__support-value">{format_score(support)}</span>
                </span>
            </div>
            <p class="paper__argument">
                <strong>{move || translate(lang.get(), "core.argument")}</strong>
                ": "
                {move || core_argument.resolve(lang.get()).to_owned()}
            </p>
            {has_notes
                .then(|| {
                    view! {
                        <p class="paper__notes">
                            <strong>{move || translate(lang.get(), "notes")}</strong>
                            ": "
                            {move || notes.resolve(lang.get()).to_owned()}
                        </p>
                    }
                })}
        </div>
    }
}
