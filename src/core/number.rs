//! Conversions between readout strings and numeric values.

/// Render a value using the decimal-trim rule.
///
/// Whole numbers render without a fractional part; everything else renders
/// as the shortest decimal string that round-trips through `f64`. Negative
/// zero renders as `"0"`.
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(-12.0), "-12");
/// assert_eq!(format_number(0.07), "0.07");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return format!("{}", value as i64);
    }
    // f64 Display never uses exponent notation, so the result re-parses.
    format!("{value}")
}

/// Parse a readout string into a finite value.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
