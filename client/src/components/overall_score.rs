//! Two-ring donut: level weights on the outside, achievement inside.
//!
//! DESIGN
//! ======
//! In overview mode the inner ring and center readout show the overall
//! score. Hovering a level (segment or legend row) switches to focused
//! view for that level until the pointer leaves the chart.

#[cfg(test)]
#[path = "overall_score_test.rs"]
mod overall_score_test;

use leptos::prelude::*;
use rubric::chart::{CENTER, INNER_RADIUS, INNER_STROKE, OUTER_RADIUS, OUTER_STROKE, achievement_arc, ring_segments};
use rubric::i18n::{level_label, translate};
use rubric::number::format_percent;
use rubric::style::LevelStyle;
use rubric::{Document, Language, LocalizedText};

use crate::state::dashboard::DashboardState;
use crate::state::language::use_language;

/// Inner ring color in overview mode.
const OVERALL_STROKE: &str = "#38bdf8";

/// Chart-ready view of one level.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelSummary {
    pub title: LocalizedText,
    pub score: Option<f64>,
    pub weight: f64,
    pub style: LevelStyle,
}

pub fn level_summaries(doc: &Document) -> Vec<LevelSummary> {
    doc.levels
        .iter()
        .zip(doc.level_weights())
        .map(|(level, weight)| LevelSummary {
            title: level.title.clone(),
            score: level.score(),
            weight,
            style: LevelStyle::of(level),
        })
        .collect()
}

/// The hovered level, if the index is valid.
pub fn focused_level(levels: &[LevelSummary], hovered: Option<usize>) -> Option<&LevelSummary> {
    hovered.and_then(|i| levels.get(i))
}

/// Score for the inner ring and center readout.
pub fn center_score(levels: &[LevelSummary], overall: Option<f64>, hovered: Option<usize>) -> Option<f64> {
    match focused_level(levels, hovered) {
        Some(level) => level.score,
        None => overall,
    }
}

/// Dictionary keys for the mode caption and its hint.
pub fn caption_keys(focused: bool) -> (&'static str, &'static str) {
    if focused { ("focused.view", "detailed.achievement") } else { ("overview.mode", "weight.proportions") }
}

pub fn segment_class(hovered: Option<usize>, index: usize) -> &'static str {
    match hovered {
        None => "overall-score__segment",
        Some(h) if h == index => "overall-score__segment overall-score__segment--active",
        Some(_) => "overall-score__segment overall-score__segment--dimmed",
    }
}

pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "--".to_owned(), format_percent)
}

pub fn format_weight(weight: f64) -> String {
    format!("{weight:.0}%")
}

/// Center caption: the overall label, or the focused level's name.
fn center_label(lang: Language, focused: Option<&LevelSummary>) -> String {
    match focused {
        Some(level) => level_label(lang, &level.title),
        None => translate(lang, "overall.score").to_owned(),
    }
}

#[component]
pub fn OverallScore(levels: Vec<LevelSummary>, overall: Option<f64>) -> impl IntoView {
    let lang = use_language();
    let state = expect_context::<RwSignal<DashboardState>>();

    let weights: Vec<f64> = levels.iter().map(|l| l.weight).collect();
    let segments = ring_segments(&weights, OUTER_RADIUS);
    let levels = StoredValue::new(levels);

    let hovered = move || state.with(|s| s.hovered_level);
    let focused = move || levels.with_value(|l| focused_level(l, hovered()).is_some());
    let score = move || levels.with_value(|l| center_score(l, overall, hovered()));
    let inner_arc = move || achievement_arc(score().unwrap_or(0.0), INNER_RADIUS);
    let inner_stroke = move || {
        levels.with_value(|l| focused_level(l, hovered()).map_or(OVERALL_STROKE, |level| level.style.stroke))
    };
    let label = move || levels.with_value(|l| center_label(lang.get(), focused_level(l, hovered())));

    let hover = move |index: usize| state.update(|s| s.hover(index));
    let clear = move || state.update(DashboardState::clear_hover);

    let outer_ring = segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let stroke = levels.with_value(|l| l.get(i).map_or(LevelStyle::GENERIC.stroke, |level| level.style.stroke));
            view! {
                <circle
                    class=move || segment_class(hovered(), i)
                    cx=CENTER.to_string()
                    cy=CENTER.to_string()
                    r=OUTER_RADIUS.to_string()
                    fill="none"
                    stroke=stroke
                    stroke-width=OUTER_STROKE.to_string()
                    stroke-dasharray=format!("{:.3}", segment.dash_array)
                    stroke-dashoffset=format!("{:.3}", segment.dash_offset)
                    transform=segment.svg_transform()
                    on:mouseenter=move |_| hover(i)
                ></circle>
            }
        })
        .collect_view();

    let legend = levels.with_value(|all| {
        all.iter()
            .cloned()
            .enumerate()
            .map(|(i, level)| {
                let LevelSummary { title, score, weight, style } = level;
                view! {
                    <li
                        class=move || segment_class(hovered(), i).replace("segment", "legend-row")
                        on:mouseenter=move |_| hover(i)
                    >
                        <span class=format!("overall-score__swatch level--{}", style.accent)></span>
                        <span class="overall-score__legend-name">{move || level_label(lang.get(), &title)}</span>
                        <span class="overall-score__legend-meta">
                            {format_score(score)}
                            " · "
                            {move || translate(lang.get(), "weight")}
                            " "
                            {format_weight(weight)}
                        </span>
                    </li>
                }
            })
            .collect_view()
    });

    view! {
        <section class="overall-score" on:mouseleave=move |_| clear()>
            <div class="overall-score__chart">
                <svg class="overall-score__svg" viewBox="0 0 100 100" role="img">
                    <circle
                        class="overall-score__track"
                        cx=CENTER.to_string()
                        cy=CENTER.to_string()
                        r=OUTER_RADIUS.to_string()
                        fill="none"
                        stroke-width=OUTER_STROKE.to_string()
                    ></circle>
                    {outer_ring}
                    <circle
                        class="overall-score__track overall-score__track--inner"
                        cx=CENTER.to_string()
                        cy=CENTER.to_string()
                        r=INNER_RADIUS.to_string()
                        fill="none"
                        stroke-width=INNER_STROKE.to_string()
                    ></circle>
                    <circle
                        class="overall-score__achievement"
                        cx=CENTER.to_string()
                        cy=CENTER.to_string()
                        r=INNER_RADIUS.to_string()
                        fill="none"
                        stroke=inner_stroke
                        stroke-width=INNER_STROKE.to_string()
                        stroke-linecap="round"
                        stroke-dasharray=move || format!("{:.3}", inner_arc().dash_array)
                        stroke-dashoffset=move || format!("{:.3}", inner_arc().dash_offset)
                        transform=move || inner_arc().svg_transform()
                    ></circle>
                </svg>
                <div class="overall-score__center">
                    <span class="overall-score__value">{move || format_score(score())}</span>
                    <span class="overall-score__label">{label}</span>
                </div>
            </div>
            <div class="overall-score__legend">
                <p class="overall-score__mode">{move || translate(lang.get(), caption_keys(focused()).0)}</p>
                <p class="overall-score__hint">{move || translate(lang.get(), caption_keys(focused()).1)}</p>
                <ul class="overall-score__levels">{legend}</ul>
            </div>
        </section>
    }
}
