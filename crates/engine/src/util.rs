//! Internal helpers for amount rounding and text normalization.
//!
//! These utilities are **not** part of the public API.

/// Above this magnitude an `f64` has no fractional cents left to round.
const ROUND_LIMIT: f64 = 1e15;

/// Round to two fractional digits.
///
/// Goes through exact decimal formatting, so ties on the stored binary value
/// round to even and no intermediate `x * 100` can overflow.
pub(crate) fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND_LIMIT {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Trim optional text; blank input becomes `None`.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
