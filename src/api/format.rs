//! Numeric and date formatting collaborators for label text.

use chrono::{DateTime, Utc};

/// Formats a price for the header readout: thousands-grouped, two decimals.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let negative = value < 0.0;
    let text = format!("{:.2}", value.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Rounds to three significant digits for axis labels, trimming trailing
/// zeros so compact prices stay compact.
#[must_use]
pub fn number_with_significant_digits(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10_f64.powi(magnitude - 2);
    let rounded = (value / factor).round() * factor;
    let decimals = (2 - magnitude).max(0) as usize;

    trim_trailing_zeros(format!("{rounded:.decimals$}"))
}

/// Formats a unix timestamp (seconds, UTC) with a strftime pattern.
///
/// Timestamps outside chrono's representable range fall back to the raw
/// number rather than failing the label pass.
#[must_use]
pub fn format_unix(unix: i64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp(unix, 0) {
        Some(datetime) => datetime.format(pattern).to_string(),
        None => unix.to_string(),
    }
}

pub(crate) fn trim_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" { "0".to_owned() } else { text }
}
