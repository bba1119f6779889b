//! One rubric level: heading, core question, and its metric cards.

use leptos::prelude::*;
use rubric::i18n::{level_label, subtitle_label, translate};
use rubric::style::LevelStyle;
use rubric::{Language, Level};

use crate::components::level_badge::LevelBadge;
use crate::components::metric_card::MetricCard;
use crate::components::overall_score::{format_score, format_weight};
use crate::state::language::use_language;

#[component]
pub fn LevelSection(level: Level, weight: f64) -> impl IntoView {
    let lang = use_language();
    let style = LevelStyle::of(&level);
    let score = level.score();
    let metric_weights = level.metric_weights();
    // Analytics always report the English level name.
    let level_name = level.title.resolve(Language::En).to_owned();

    let Level { id, title, subtitle, core_question, metrics, .. } = level;
    let subtitle_title = title.clone();
    let has_question = !core_question.is_empty();

    let cards = metrics
        .into_iter()
        .zip(metric_weights)
        .map(|(metric, metric_weight)| {
            view! { <MetricCard metric=metric weight=metric_weight level_id=id.clone() level_name=level_name.clone()/> }
        })
        .collect_view();

    view! {
        <section class=format!("level level--{}", style.accent) id=format!("level-{id}")>
            <header class="level__header">
                <span class="level__badge">
                    <LevelBadge icon=style.icon/>
                </span>
                <div class="level__heading">
                    <h2 class="level__title">{move || level_label(lang.get(), &title)}</h2>
                    <p class="level__subtitle">{move || subtitle_label(lang.get(), &subtitle_title, &subtitle)}</p>
                </div>
                <div class="level__stats">
                    <span class="level__score" title=move || translate(lang.get(), "score")>{format_score(score)}</span>
                    <span class="level__weight">
                        {move || translate(lang.get(), "weight")}
                        ": "
                        {format_weight(weight)}
                    </span>
                </div>
            </header>
            {has_question
                .then(|| {
                    view! {
                        <p class="level__question">
                            <strong>{move || translate(lang.get(), "core.question")}</strong>
                            " "
                            {move || core_question.resolve(lang.get()).to_owned()}
                        </p>
                    }
                })}
            <div class="level__metrics">{cards}</div>
        </section>
    }
}
