//! Round icon badge for a level.

use leptos::prelude::*;
use rubric::style::LevelIcon;

/// SVG path data for each icon on a 24×24 grid.
fn icon_paths(icon: LevelIcon) -> &'static [&'static str] {
    match icon {
        LevelIcon::Philosophy => &[
            "M12 6.25C12 6.25 10.73 4 8.46 4C6.2 4 4.5 5.7 4.5 7.96C4.5 10.23 6.2 12 8.46 12C10.73 12 12 9.75 12 9.75M12 6.25C12 6.25 13.27 4 15.54 4C17.8 4 19.5 5.7 19.5 7.96C19.5 10.23 17.8 12 15.54 12C13.27 12 12 9.75 12 9.75M12 12V19.5M8.25 19.5H15.75",
        ],
        LevelIcon::Neuroscience => &[
            "M8.5 10.5C8.5 9.12 9.62 8 11 8H13C14.38 8 15.5 9.12 15.5 10.5V13.5C15.5 14.88 14.38 16 13 16H11C9.62 16 8.5 14.88 8.5 13.5V10.5Z",
            "M12 8V4M12 16V20M8.5 12H4.5M19.5 12H15.5",
        ],
        LevelIcon::Psychology => &[
            "M12 14l9-5-9-5-9 5 9 5z",
            "M12 14l6.16-3.42A12 12 0 0012 4.06 12 12 0 005.84 10.58L12 14z",
            "M12 14v7l9-5",
        ],
        LevelIcon::CognitiveScience => &["M9 18h6M10 22h4", "M12 2a7 7 0 00-4 12.74V17h8v-2.26A7 7 0 0012 2z"],
        LevelIcon::Generic => &["M12 3a9 9 0 100 18 9 9 0 000-18z", "M12 8v4l3 3"],
    }
}

#[component]
pub fn LevelBadge(icon: LevelIcon) -> impl IntoView {
    view! {
        <svg
            class="level-badge"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
