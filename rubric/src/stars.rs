//! Five-star rendering of a 0–100 support value.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

pub const STAR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Number of half stars earned by `support`, 0–10.
fn half_steps(support: f64) -> usize {
    if !support.is_finite() {
        return 0;
    }
    // 20 points per star, so 10 points per half star.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let halves = (support.clamp(0.0, 100.0) / 10.0).round() as usize;
    halves
}

/// Stars for `support`, rounded to the nearest half star.
#[must_use]
pub fn star_rating(support: f64) -> [Star; STAR_COUNT] {
    let halves = half_steps(support);
    std::array::from_fn(|i| {
        let full_at = (i + 1) * 2;
        if halves >= full_at {
            Star::Full
        } else if halves + 1 == full_at {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

/// Star value for labels, e.g. `3.5`.
#[must_use]
pub fn star_value(support: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let value = half_steps(support) as f64 / 2.0;
    value
}
