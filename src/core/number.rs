// src/core/number.rs
// Locale numbers as the broker renders them: comma decimal separator, nothing else.
// Thousands separators or currency suffixes are not repaired; they fail loudly.

use crate::error::NumericFormatError;

/// `"10,5"` → `10.5`. Plain `"120"` and `"-3.1"` are accepted as well.
pub fn parse_decimal(raw: &str) -> Result<f64, NumericFormatError> {
    let s = raw.trim().replace(',', ".");
    if !is_decimal(&s) {
        return Err(NumericFormatError { value: s!(raw) });
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(NumericFormatError { value: s!(raw) }),
    }
}

/// Whole number, e.g. the days-held column.
pub fn parse_whole(raw: &str) -> Result<i64, NumericFormatError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| NumericFormatError { value: s!(raw) })
}

/// `[+-]digits[.digits][e[+-]digits]`, at least one digit in the mantissa.
/// Rejects what `f64::from_str` would otherwise let through ("inf", "NaN").
fn is_decimal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) { i += 1; }

    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() { i += 1; digits += 1; }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() { i += 1; digits += 1; }
    }
    if digits == 0 { return false; }

    if i < b.len() && matches!(b[i], b'e' | b'E') {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) { i += 1; }
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() { i += 1; }
        if i == start { return false; }
    }
    i == b.len()
}
