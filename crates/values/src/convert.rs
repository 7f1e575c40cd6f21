//! Explicit conversions between value types
//!
//! The source of each conversion is always visible at the call site: there
//! are no implicit coercions in the value model, and nothing here falls back
//! to a silent default. Conversions that can fail return an error or `None`.

use crate::{Decimal, Number, Result, Text, Value, unexpected_type, value_error};
use std::str::FromStr;

/// Converts a value to a [Number]
///
/// Booleans convert to `0`/`1`, numbers pass through, and strings are
/// trimmed and then parsed in full, accepting `0x`/`0o`/`0b` prefixes.
/// Everything else is an error — including `Null` and the empty string,
/// which dynamic languages tend to quietly turn into zero.
pub fn to_number(value: &Value) -> Result<Number> {
    match value {
        Value::Bool(b) => Ok(Number::Int(i64::from(*b))),
        Value::Number(n) => Ok(*n),
        Value::Str(s) => number_from_str(s.trim()),
        unexpected => unexpected_type("a boolean, a number, or a numeric string", unexpected),
    }
}

/// Converts a value to [Text]
///
/// Total for every value; containers render with the display rules.
pub fn to_text(value: &Value) -> Text {
    match value {
        Value::Str(s) => s.clone(),
        other => Text::from(other.to_string()),
    }
}

/// Parses the longest leading integer prefix of the string
///
/// Leading whitespace is skipped, a sign is accepted, and a `0x`/`0X` prefix
/// switches to hexadecimal. Parsing stops at the first character that isn't
/// a digit, so `"3 blind mice"` is 3 and `"0.1"` is 0. Returns `None` when
/// no digits are found.
pub fn parse_int(input: &str) -> Option<i64> {
    let (rest, negative) = split_sign(input.trim_start());

    if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        parse_digits(hex, 16, negative)
    } else {
        parse_digits(rest, 10, negative)
    }
}

/// Parses the longest leading integer prefix of the string in the given radix
///
/// A radix outside `2..=36` is an error; an input without any digits is
/// `Ok(None)`.
pub fn parse_int_with_radix(input: &str, radix: u32) -> Result<Option<i64>> {
    if !(2..=36).contains(&radix) {
        return value_error!("radix must be within 2..=36");
    }

    let (rest, negative) = split_sign(input.trim_start());
    Ok(parse_digits(rest, radix, negative))
}

/// Parses the longest leading float prefix of the string
///
/// Leading whitespace is skipped, so `" 3.14 meters"` is 3.14 and `".1"` is
/// 0.1. Returns `None` when the input doesn't start with a number, e.g.
/// `"$72.47"`.
pub fn parse_float(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let prefix_len = float_prefix_len(input);
    input[..prefix_len].parse().ok()
}

/// Parses a [Decimal] from the full string
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    Decimal::from_str(input.trim())
}

// Parses a whole trimmed string as a number, trying int representations
// before falling back to a float
fn number_from_str(s: &str) -> Result<Number> {
    let maybe_integer = if let Some(hex) = s.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(octal) = s.strip_prefix("0o") {
        i64::from_str_radix(octal, 8)
    } else if let Some(binary) = s.strip_prefix("0b") {
        i64::from_str_radix(binary, 2)
    } else {
        s.parse::<i64>()
    };

    if let Ok(integer) = maybe_integer {
        Ok(integer.into())
    } else if let Ok(float) = s.parse::<f64>() {
        Ok(float.into())
    } else {
        Err(crate::ErrorKind::InvalidNumber { input: s.into() }.into())
    }
}

fn split_sign(input: &str) -> (&str, bool) {
    if let Some(rest) = input.strip_prefix('-') {
        (rest, true)
    } else if let Some(rest) = input.strip_prefix('+') {
        (rest, false)
    } else {
        (input, false)
    }
}

// Parses the leading run of digits valid in the radix, ignoring the rest
fn parse_digits(input: &str, radix: u32, negative: bool) -> Option<i64> {
    let digits_len = input
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(input.len());
    if digits_len == 0 {
        return None;
    }

    i64::from_str_radix(&input[..digits_len], radix)
        .ok()
        .map(|n| if negative { -n } else { n })
}

// Returns the byte length of the longest float literal starting the string:
// an optional sign, digits with at most one dot, and an optional exponent
fn float_prefix_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut position = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        position = 1;
    }

    while let Some(&byte) = bytes.get(position) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            b'e' | b'E' if seen_digit => {
                if let Some(exponent_len) = exponent_len(&bytes[position..]) {
                    position += exponent_len;
                }
                break;
            }
            _ => break,
        }
        position += 1;
    }

    if seen_digit { position } else { 0 }
}

// Returns the length of a valid exponent suffix ('e' with optional sign and
// at least one digit), or None if the suffix isn't a complete exponent
fn exponent_len(bytes: &[u8]) -> Option<usize> {
    let mut position = 1;
    if matches!(bytes.get(position), Some(b'-') | Some(b'+')) {
        position += 1;
    }

    let digits = bytes[position..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 { None } else { Some(position + digits) }
}
