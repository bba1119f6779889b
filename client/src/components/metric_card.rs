//! Expandable card for one metric and its supporting papers.

use leptos::prelude::*;
use rubric::i18n::{metric_label, translate};
use rubric::{Language, Metric};

use crate::components::overall_score::{format_score, format_weight};
use crate::components::paper_row::PaperRow;
use crate::components::progress_bar::ProgressBar;
use crate::state::dashboard::{DashboardState, metric_key};
use crate::state::language::use_language;
use crate::util::analytics;

pub fn card_class(expanded: bool) -> &'static str {
    if expanded { "metric-card metric-card--expanded" } else { "metric-card" }
}

/// A metric card. Clicking the header opens or closes the paper list.
#[component]
pub fn MetricCard(metric: Metric, weight: f64, level_id: String, level_name: String) -> impl IntoView {
    let lang = use_language();
    let state = expect_context::<RwSignal<DashboardState>>();

    let key = metric_key(&level_id, &metric.id);
    let score = metric.score();
    let name_en = metric.name.resolve(Language::En).to_owned();
    let Metric { id, name, description, papers, .. } = metric;
    let metric_id = id.clone();

    let expanded = Memo::new({
        let key = key.clone();
        move |_| state.with(|s| s.is_expanded(&key))
    });

    let on_toggle = {
        let id = id.clone();
        let level_name = level_name.clone();
        move |_| {
            let opened = state.try_update(|s| s.toggle_metric(&key)).unwrap_or(false);
            if opened {
                analytics::dispatch_all(&analytics::metric_click(&id, &name_en, &level_name));
            }
        }
    };

    let panel = StoredValue::new((papers, id, level_name));
    let paper_list = move || {
        expanded.get().then(|| {
            panel.with_value(|(papers, metric_id, level_name)| {
                view! {
                    <div class="metric-card__papers">
                        <h4 class="metric-card__papers-title">{move || translate(lang.get(), "papers")}</h4>
                        {papers
                            .iter()
                            .map(|paper| {
                                view! {
                                    <PaperRow
                                        paper=paper.clone()
                                        metric_id=metric_id.clone()
                                        level_name=level_name.clone()
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })
        })
    };

    view! {
        <article class=move || card_class(expanded.get())>
            <button
                class="metric-card__header"
                on:click=on_toggle
                aria-expanded=move || expanded.get().to_string()
            >
                <span class="metric-card__name">{move || metric_label(lang.get(), &metric_id, &name)}</span>
                <span class="metric-card__score">{format_score(score)}</span>
                <span class="metric-card__chevron" aria-hidden="true">
                    {move || if expanded.get() { "▾" } else { "▸" }}
                </span>
            </button>
            <p class="metric-card__description">{move || description.resolve(lang.get()).to_owned()}</p>
            <div class="metric-card__meta">
                {move || translate(lang.get(), "weight")}
                ": "
                {format_weight(weight)}
            </div>
            <ProgressBar value=score.unwrap_or(0.0)/>
            {paper_list}
        </article>
    }
}
