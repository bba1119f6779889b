//! Per-level icon and accent colors.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::document::Level;
use crate::i18n::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelIcon {
    Philosophy,
    Neuroscience,
    Psychology,
    CognitiveScience,
    Generic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStyle {
    pub icon: LevelIcon,
    /// Class name suffix, e.g. `blue` for `level--blue`.
    pub accent: &'static str,
    /// Stroke color for SVG ring segments.
    pub stroke: &'static str,
}

impl LevelStyle {
    pub const GENERIC: Self = Self { icon: LevelIcon::Generic, accent: "gray", stroke: "#9ca3af" };

    /// Style keyed by a level id or English title.
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        let key = key.to_ascii_lowercase();
        if key.contains("philosoph") {
            Self { icon: LevelIcon::Philosophy, accent: "blue", stroke: "#60a5fa" }
        } else if key.contains("neuro") {
            Self { icon: LevelIcon::Neuroscience, accent: "purple", stroke: "#c084fc" }
        } else if key.contains("psycholog") {
            Self { icon: LevelIcon::Psychology, accent: "green", stroke: "#4ade80" }
        } else if key.contains("cognitive") {
            Self { icon: LevelIcon::CognitiveScience, accent: "amber", stroke: "#fbbf24" }
        } else {
            Self::GENERIC
        }
    }

    /// Style for `level`, trying its id first and then its English title.
    #[must_use]
    pub fn of(level: &Level) -> Self {
        let by_id = Self::for_key(&level.id);
        if by_id != Self::GENERIC {
            return by_id;
        }
        Self::for_key(level.title.resolve(Language::En))
    }
}
