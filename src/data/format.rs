//! Built-in label formatters, used when the caller does not supply any.
//!
//! The short form labels the slider boundaries, where space is tight; the
//! long form renders the single-value readout, where the exact value matters
//! more than width. Both can be replaced per widget via
//! [`crate::RangeHistogram::short_format`] and
//! [`crate::RangeHistogram::long_format`].

/// Compact boundary label: up to two decimals, trailing zeros trimmed,
/// scientific notation once plain decimal would get unwieldy.
///
/// ```
/// use rangehist::default_short_format;
///
/// assert_eq!(default_short_format(0.0), "0");
/// assert_eq!(default_short_format(2.5), "2.5");
/// assert_eq!(default_short_format(42.0), "42");
/// assert_eq!(default_short_format(3.14159), "3.14");
/// ```
pub fn default_short_format(value: f64) -> String {
    format_adaptive(value, 2)
}

/// Full readout for a zero-width domain: four decimals, trailing zeros
/// trimmed.
pub fn default_long_format(value: f64) -> String {
    format_adaptive(value, 4)
}

/// Decimal notation with at most `dec_pl` decimals and no trailing zeros,
/// switching to scientific notation outside `[1e-4, 1e6)`.
fn format_adaptive(value: f64, dec_pl: usize) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    if !(1e-4..1e6).contains(&magnitude) {
        return format_scientific(value, dec_pl);
    }
    let formatted = format!("{:.*}", dec_pl, value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

/// Render `value` as compact scientific notation like `1.23e5` or `-4.00e-2`.
fn format_scientific(value: f64, digits: usize) -> String {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let abs_val = value.abs();
    let exp = abs_val.log10().floor() as i32;
    let mantissa = sign * abs_val / 10f64.powi(exp);
    if exp == 0 {
        format!("{:.*}", digits, mantissa)
    } else {
        format!("{:.*}e{}", digits, mantissa, exp)
    }
}
