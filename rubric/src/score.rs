//! Weighted and unweighted averages over parsed scores.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

/// Σ score·weight / Σ weight.
///
/// Items with a non-finite score or a non-positive weight are skipped.
/// Returns `None` when no weight remains.
pub fn weighted_average<I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (sum, total) = items
        .into_iter()
        .filter(|(score, weight)| score.is_finite() && weight.is_finite() && *weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), (score, weight)| (sum + score * weight, total + weight));
    (total > 0.0).then(|| sum / total)
}

/// Unweighted mean of the finite values.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    weighted_average(values.into_iter().map(|v| (v, 1.0)))
}

/// Resolve per-item weights.
///
/// When any item carries a weight, missing ones count as zero. When none do,
/// every item gets an equal share of 100.
#[must_use]
pub fn weights_or_equal(raw: &[Option<f64>]) -> Vec<f64> {
    if raw.iter().any(Option::is_some) {
        raw.iter().map(|w| w.unwrap_or(0.0)).collect()
    } else if raw.is_empty() {
        Vec::new()
    } else {
        #[allow(clippy::cast_precision_loss)]
        let share = 100.0 / raw.len() as f64;
        vec![share; raw.len()]
    }
}
