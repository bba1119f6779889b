//! The rubric document: levels → metrics → supporting papers.
//!
//! DESIGN
//! ======
//! Every field is optional on the wire and defaults to empty, so any data
//! revision deserializes. Numeric fields stay as strings; the accessor
//! methods parse them and fall back to an aggregate of the children when the
//! upstream value is missing.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::number::{parse_number, parse_percent};
use crate::score::{mean, weighted_average, weights_or_equal};
use crate::text::LocalizedText;

/// Error returned by [`Document::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    /// The input is not JSON or does not have the document's shape.
    #[error("invalid rubric document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root of the data file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub name: LocalizedText,
    pub description: LocalizedText,
    #[serde(deserialize_with = "string_or_number")]
    pub version: String,
    pub author: String,
    pub license: String,
    /// Overall score, e.g. `"31.2%"`.
    #[serde(alias = "overall_average", deserialize_with = "string_or_number")]
    pub average: String,
    #[serde(alias = "Levels")]
    pub levels: Vec<Level>,
}

/// A top-level rubric dimension such as Philosophy or Neuroscience.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub id: String,
    #[serde(alias = "name")]
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    #[serde(deserialize_with = "string_or_number")]
    pub average: String,
    /// Share of the overall score. Only some data revisions carry it.
    #[serde(deserialize_with = "string_or_number")]
    pub weight: String,
    pub core_question: LocalizedText,
    pub metrics: Vec<Metric>,
}

/// A scored sub-criterion within a level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    #[serde(deserialize_with = "string_or_number")]
    pub weight: String,
    #[serde(deserialize_with = "string_or_number")]
    pub average: String,
    pub papers: Vec<Paper>,
}

/// A paper cited as evidence for a metric.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
    pub title: LocalizedText,
    pub url: String,
    pub core_argument: LocalizedText,
    /// How strongly the paper supports the metric's claim, 0–100.
    #[serde(deserialize_with = "string_or_number")]
    pub support: String,
    pub notes: LocalizedText,
}

impl Document {
    /// Parse a data file.
    ///
    /// # Errors
    ///
    /// Returns [`RubricError::Json`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, RubricError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Overall score on the 0–100 scale.
    #[must_use]
    pub fn overall_score(&self) -> Option<f64> {
        parse_percent(&self.average).or_else(|| self.computed_score())
    }

    /// Overall score recomputed from the levels.
    #[must_use]
    pub fn computed_score(&self) -> Option<f64> {
        let weights = self.level_weights();
        weighted_average(
            self.levels
                .iter()
                .zip(weights)
                .filter_map(|(level, weight)| level.score().map(|score| (score, weight))),
        )
    }

    /// Weight of each level, in order. See [`weights_or_equal`].
    #[must_use]
    pub fn level_weights(&self) -> Vec<f64> {
        let raw: Vec<Option<f64>> = self.levels.iter().map(Level::weight_value).collect();
        weights_or_equal(&raw)
    }

    /// Number of papers cited across the whole rubric.
    #[must_use]
    pub fn paper_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|level| &level.metrics)
            .map(|metric| metric.papers.len())
            .sum()
    }
}

impl Level {
    /// Level score on the 0–100 scale.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        parse_percent(&self.average).or_else(|| self.computed_score())
    }

    /// Level score recomputed from its metrics.
    #[must_use]
    pub fn computed_score(&self) -> Option<f64> {
        let weights = self.metric_weights();
        weighted_average(
            self.metrics
                .iter()
                .zip(weights)
                .filter_map(|(metric, weight)| metric.score().map(|score| (score, weight))),
        )
    }

    #[must_use]
    pub fn weight_value(&self) -> Option<f64> {
        parse_number(&self.weight)
    }

    /// Weight of each metric within this level, in order.
    #[must_use]
    pub fn metric_weights(&self) -> Vec<f64> {
        let raw: Vec<Option<f64>> = self.metrics.iter().map(Metric::weight_value).collect();
        weights_or_equal(&raw)
    }
}

impl Metric {
    /// Metric score on the 0–100 scale, or the mean paper support.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        parse_percent(&self.average).or_else(|| mean(self.papers.iter().filter_map(Paper::support_score)))
    }

    #[must_use]
    pub fn weight_value(&self) -> Option<f64> {
        parse_number(&self.weight)
    }
}

impl Paper {
    #[must_use]
    pub fn support_score(&self) -> Option<f64> {
        parse_percent(&self.support)
    }
}

/// Accept `"61.5%"`, `61.5` or `null` for a numeric string field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!("expected string or number, got {other}"))),
    }
}
