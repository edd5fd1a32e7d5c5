//! Decimal-string money fields.
//!
//! Amounts are parsed as `f64`: good enough for display totals, not for
//! accounting.

/// Parse a decimal string, reading missing or unparseable values as zero.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Format an amount with exactly two decimals.
///
/// Anything that rounds to zero prints as `0.00`, never `-0.00`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() / 100.0 + 0.0;
    format!("{cents:.2}")
}
