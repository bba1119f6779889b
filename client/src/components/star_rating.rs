//! Five-star support indicator.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;
use rubric::stars::{STAR_COUNT, Star, star_rating, star_value};

pub fn star_class(star: Star) -> &'static str {
    match star {
        Star::Full => "star star--full",
        Star::Half => "star star--half",
        Star::Empty => "star star--empty",
    }
}

pub fn star_label(support: f64) -> String {
    format!("{} / {STAR_COUNT}", star_value(support))
}

#[component]
pub fn StarRating(support: f64) -> impl IntoView {
    let label = star_label(support);

    view! {
        <span class="stars" role="img" aria-label=label.clone() title=label>
            {star_rating(support)
                .into_iter()
                .map(|star| view! { <span class=star_class(star) aria-hidden="true">"★"</span> })
                .collect_view()}
        </span>
    }
}
