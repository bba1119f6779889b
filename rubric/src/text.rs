//! Text fields that are either plain strings or `{zh, en}` pairs.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A display string as it appears in the data file.
///
/// Older data revisions carry plain strings; the bilingual revision carries
/// an object with one entry per language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Pair {
        #[serde(default)]
        zh: String,
        #[serde(default)]
        en: String,
    },
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl LocalizedText {
    /// Text for `lang`, falling back to the other language when empty.
    #[must_use]
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Pair { zh, en } => {
                let (wanted, other) = match lang {
                    Language::Zh => (zh, en),
                    Language::En => (en, zh),
                };
                if wanted.trim().is_empty() { other } else { wanted }
            }
        }
    }

    /// Whether this carries per-language text.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::Pair { zh, en } => zh.trim().is_empty() && en.trim().is_empty(),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}
