//! SVG geometry for the two-ring donut and progress bars.
//!
//! Rings are drawn as full-circumference circles whose visible length is
//! controlled with `stroke-dasharray`/`stroke-dashoffset`, then rotated so
//! consecutive segments start where the previous one ended.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::PI;

/// Side of the square SVG viewBox.
pub const VIEWBOX_SIZE: f64 = 100.0;
pub const CENTER: f64 = VIEWBOX_SIZE / 2.0;
/// Radius of the weight-proportion ring.
pub const OUTER_RADIUS: f64 = 45.0;
/// Radius of the achievement ring.
pub const INNER_RADIUS: f64 = 35.0;
pub const OUTER_STROKE: f64 = 8.0;
pub const INNER_STROKE: f64 = 6.0;

/// One stroked arc of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSegment {
    /// Portion of the full circle, 0–1.
    pub fraction: f64,
    pub dash_array: f64,
    pub dash_offset: f64,
    /// Rotation applied around the center; −90 starts at twelve o'clock.
    pub rotation_deg: f64,
}

impl RingSegment {
    /// Value for the SVG `transform` attribute.
    #[must_use]
    pub fn svg_transform(&self) -> String {
        format!("rotate({:.3} {CENTER} {CENTER})", self.rotation_deg)
    }

    fn new(fraction: f64, start_fraction: f64, radius: f64) -> Self {
        let c = circumference(radius);
        Self {
            fraction,
            dash_array: c,
            dash_offset: c - fraction * c,
            rotation_deg: start_fraction * 360.0 - 90.0,
        }
    }
}

#[must_use]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Split a ring into consecutive segments proportional to `weights`.
///
/// Weights are normalized by their sum so the ring always closes.
/// Non-finite and negative weights count as zero.
#[must_use]
pub fn ring_segments(weights: &[f64], radius: f64) -> Vec<RingSegment> {
    let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let total: f64 = weights.iter().copied().map(usable).sum();

    let mut start = 0.0;
    weights
        .iter()
        .map(|&w| {
            let fraction = if total > 0.0 { usable(w) / total } else { 0.0 };
            let segment = RingSegment::new(fraction, start, radius);
            start += fraction;
            segment
        })
        .collect()
}

/// Arc covering `percent` of the ring, starting at twelve o'clock.
#[must_use]
pub fn achievement_arc(percent: f64, radius: f64) -> RingSegment {
    RingSegment::new(progress_width(percent) / 100.0, 0.0, radius)
}

/// CSS width percentage for a progress bar, clamped to 0–100.
#[must_use]
pub fn progress_width(percent: f64) -> f64 {
    if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 }
}

/// Color band of a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressTone {
    High,
    Medium,
    Low,
}

impl ProgressTone {
    #[must_use]
    pub fn for_score(percent: f64) -> Self {
        if percent > 70.0 {
            Self::High
        } else if percent > 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "progress__fill--high",
            Self::Medium => "progress__fill--medium",
            Self::Low => "progress__fill--low",
        }
    }
}
