//! Numeric field helpers shared by every record.
//!
//! Record numbers are plain `f64`. NaN is a legal value (it is what a malformed number input
//! yields) and JSON has no NaN literal, so serde writes it as `null`; these helpers read `null`
//! back as NaN and a missing key as the field default.

use serde::{Deserialize, Deserializer};

/// Deserialize a required number, mapping `null` to NaN.
pub fn lenient<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(de)?.unwrap_or(f64::NAN))
}

/// Deserialize an optional number whose key is present, mapping `null` to `Some(NaN)`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub fn lenient_opt<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(lenient(de)?))
}

/// Coerce free text into a number the way a number input does.
///
/// Surrounding whitespace is ignored; empty or non-numeric text yields NaN. Unsigned `0x`,
/// `0o` and `0b` literals are read in their radix.
pub fn coerce_number(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return f64::NAN;
    }
    if let Some(n) = radix_literal(t) {
        return n;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(t: &str) -> Option<f64> {
    let radix = match t.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &t[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Opacity percentage as a `0..=1` factor, falling back when the value is not a number.
pub fn percent_to_unit(percent: f64, fallback: f64) -> f64 {
    if percent.is_nan() {
        return fallback;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/model/numeric.rs"]
mod tests;
