//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one slice of the rubric each and read shared state
//! (language, hovered level, open cards) from Leptos context providers.

pub mod language_toggle;
pub mod level_badge;
pub mod level_section;
pub mod metric_card;
pub mod overall_score;
pub mod paper_row;
pub mod progress_bar;
pub mod star_rating;
