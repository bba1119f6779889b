//! Horizontal score bar colored by score band.

use leptos::prelude::*;
use rubric::chart::{ProgressTone, progress_width};

/// Bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: f64) -> impl IntoView {
    let width = progress_width(value);
    let tone = ProgressTone::for_score(width);

    view! {
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=format!("{width:.1}")>
            <div class=format!("progress__fill {}", tone.css_class()) style=format!("width: {width:.1}%")></div>
        </div>
    }
}
