//! Shared numeric helpers for the scoring engine

use crate::error::ScoringError;

/// Clamp `value` into `[min, max]`, failing when `min > max`
pub fn clamp(value: f64, min: f64, max: f64) -> crate::error::Result<f64> {
    if min > max {
        return Err(ScoringError::InvalidRange { min, max }.into());
    }

    Ok(value.max(min).min(max))
}

/// Round to a fixed number of decimal places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let multiplier = 10_f64.powi(decimals as i32);
    (value * multiplier).round() / multiplier
}

/// Parse a box score cell as an integer
///
/// Reads the leading integer prefix of the trimmed cell (`"12 yds"` is 12,
/// `"-3"` is -3, `"4.7"` is 4). Cells without a leading integer, or whose
/// prefix overflows, count as 0.
pub fn parse_cell(cell: &str) -> i64 {
    let trimmed = cell.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}
