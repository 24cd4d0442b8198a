//! Lenient numeric coercion for ledger fields.
//!
//! Ledger blobs are written by clients without schema validation, so a numeric
//! field may hold a JSON number, a numeric string, a string with trailing
//! garbage, or something else entirely. Every coercion here is total: anything
//! that does not yield a finite number becomes 0.

use serde_json::Value;

/// Coerce a JSON value to a float, reading the longest numeric prefix of strings.
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_float_str(s),
        _ => 0.0,
    };
    finite_or_zero(parsed)
}

/// Coerce an optional JSON value to a float; missing values are 0.
pub fn coerce_opt_f64(value: Option<&Value>) -> f64 {
    value.map(coerce_f64).unwrap_or(0.0)
}

/// Coerce a JSON value to an integer, truncating toward zero.
pub fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => truncate(n.as_f64().unwrap_or(0.0)),
        },
        Value::String(s) => parse_int_str(s),
        _ => 0,
    }
}

/// Coerce an optional JSON value to an integer; missing values are 0.
pub fn coerce_opt_i64(value: Option<&Value>) -> i64 {
    value.map(coerce_i64).unwrap_or(0)
}

/// Parse the longest leading float literal of `s` (after leading whitespace).
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Returns 0 when no digits are found.
pub fn parse_float_str(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    finite_or_zero(s[..end].parse::<f64>().unwrap_or(0.0))
}

/// Parse the leading base-10 integer of `s` (after leading whitespace).
///
/// Saturates at the `i64` bounds. Returns 0 when no digits are found.
pub fn parse_int_str(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in rest.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        value.saturating_neg()
    } else {
        value
    }
}

fn truncate(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
