//! Shared rubric model and score arithmetic for the consciousness dashboard.
//!
//! This crate owns the JSON document shape consumed by both `client` and
//! `cli`. Every numeric field arrives as a string and is parsed on demand, so
//! nothing here validates or rewrites the upstream data.

pub mod chart;
pub mod document;
pub mod i18n;
pub mod number;
pub mod score;
pub mod stars;
pub mod style;
pub mod text;

pub use document::{Document, Level, Metric, Paper, RubricError};
pub use i18n::Language;
pub use text::LocalizedText;
