//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a stock quantity without trailing zeros (`12.500` renders as `12.5`).
///
/// Usage in templates: `{{ batch.counters.deposit|quantity }}`
#[askama::filter_fn]
pub fn quantity(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_quantity(&value.to_string()))
}

/// Normalizes a decimal string; anything that is not a decimal passes through.
#[must_use]
pub fn format_quantity(raw: &str) -> String {
    Decimal::from_str(raw).map_or_else(|_| raw.to_string(), |d| d.normalize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity_trims_zeros() {
        assert_eq!(format_quantity("12.500"), "12.5");
        assert_eq!(format_quantity("40.000"), "40");
        assert_eq!(format_quantity("0.050"), "0.05");
    }

    #[test]
    fn test_format_quantity_passes_through_non_decimals() {
        assert_eq!(format_quantity("n/a"), "n/a");
    }
}
