//! Parsing of the numeric strings carried by the data file.
//!
//! Values arrive as `"61.5%"`, `"7.2"` or occasionally with trailing prose.
//! Parsing takes the longest numeric prefix and ignores the rest.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Bare values at or below this are scores on the legacy 0–10 scale.
pub const LEGACY_SCALE_MAX: f64 = 10.0;

/// Parse the leading number of `raw`.
///
/// Leading whitespace is skipped, then an optional sign, digits with at most
/// one decimal point, and an optional exponent. Returns `None` when no digit
/// is found or the result is not finite.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    let mut end = 0;
    if matches!(at(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while at(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if at(end) == Some(b'.') {
        end += 1;
        while at(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(at(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(at(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while at(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a score onto the 0–100 scale.
///
/// `"61.5%"` is taken as-is. A bare value at or below [`LEGACY_SCALE_MAX`]
/// is a 0–10 score and is scaled by ten; larger bare values are taken as-is.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<f64> {
    let value = parse_number(raw)?;
    if raw.trim_end().ends_with('%') || value > LEGACY_SCALE_MAX {
        Some(value)
    } else {
        Some(value * 10.0)
    }
}

/// Format a 0–100 value with one decimal, e.g. `61.5%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
