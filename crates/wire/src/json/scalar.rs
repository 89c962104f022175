//! Scalar field codecs
//!
//! Each codec converts one field kind between its native type and its
//! protobuf-JSON wire form:
//!
//! | Kind | Native | Wire |
//! |------|--------|------|
//! | int64 | `i64` | `"123"` (quoted decimal) |
//! | duration | `TimeDelta` | `"10s"`, `"1.5s"`, `"-0.25s"` |
//! | timestamp | `DateTime<Utc>` | `"2024-12-31T23:59:59Z"` |
//! | bytes | `Vec<u8>` | `"dGVzdA=="` (standard base64) |
//! | float | `f64` | JSON number |
//! | int32 | `i32` | JSON number |
//!
//! Encoders return a JSON fragment ready to splice into an object. Decoders
//! take an already-parsed JSON value and report a [`Malformed`] cause; the
//! caller attaches the field path.

use super::error::Malformed;
use base64::Engine;
use chrono::{DateTime, Datelike, SecondsFormat, TimeDelta, Utc};
use serde_json::Value;
use std::num::IntErrorKind;

const NANOS_DIGITS: usize = 9;

// === int64 as string ===

/// Encode a 64-bit integer as a quoted decimal string
pub fn encode_big_int(value: i64) -> String {
    format!("\"{}\"", value)
}

/// Decode a quoted decimal string into a 64-bit integer
///
/// Bare JSON numbers are rejected: the wire always quotes 64-bit values.
pub fn decode_big_int(value: &Value) -> Result<i64, Malformed> {
    let text = value
        .as_str()
        .ok_or_else(|| Malformed::wrong_type("string", value))?;
    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Malformed::IntegerOutOfRange(text.to_string())
        }
        _ => Malformed::InvalidInteger(text.to_string()),
    })
}

// === duration as "<seconds>s" ===

/// Format a duration as seconds with an `s` suffix, without quotes
///
/// Whole seconds print without a fraction; otherwise up to nine fractional
/// digits are printed with trailing zeros trimmed.
pub fn format_duration(delta: TimeDelta) -> String {
    let secs = delta.num_seconds();
    let nanos = delta.subsec_nanos();
    if nanos == 0 {
        return format!("{}s", secs);
    }

    // num_seconds and subsec_nanos share a sign
    let sign = if secs < 0 || nanos < 0 { "-" } else { "" };
    let frac = format!("{:0width$}", nanos.unsigned_abs(), width = NANOS_DIGITS);
    format!(
        "{}{}.{}s",
        sign,
        secs.unsigned_abs(),
        frac.trim_end_matches('0')
    )
}

/// Parse `<seconds>s`, where seconds may be negative and fractional
pub fn parse_duration(text: &str) -> Result<TimeDelta, Malformed> {
    let invalid = || Malformed::InvalidDuration(text.to_string());

    let body = text.strip_suffix('s').ok_or_else(invalid)?;
    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => {
            if frac.is_empty() || frac.len() > NANOS_DIGITS || !is_digits(frac) {
                return Err(invalid());
            }
            (whole, frac)
        }
        None => (body, ""),
    };
    if whole.is_empty() || !is_digits(whole) {
        return Err(invalid());
    }

    let out_of_range = || Malformed::DurationOutOfRange(text.to_string());
    let secs: i64 = whole.parse().map_err(|_| out_of_range())?;
    let nanos: i64 = if frac.is_empty() {
        0
    } else {
        format!("{:0<width$}", frac, width = NANOS_DIGITS)
            .parse()
            .map_err(|_| invalid())?
    };

    let delta = TimeDelta::try_seconds(secs)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or_else(out_of_range)?;
    Ok(if negative { -delta } else { delta })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Encode a duration as a quoted `"<seconds>s"` string
pub fn encode_duration(delta: TimeDelta) -> String {
    format!("\"{}\"", format_duration(delta))
}

/// Decode a quoted `"<seconds>s"` string
pub fn decode_duration(value: &Value) -> Result<TimeDelta, Malformed> {
    let text = value
        .as_str()
        .ok_or_else(|| Malformed::wrong_type("string", value))?;
    parse_duration(text)
}

// === timestamp as RFC 3339 ===

/// Encode a timestamp as a quoted RFC 3339 string in UTC, or `None` if its
/// year does not fit in four digits
///
/// Fractional seconds appear only when non-zero.
pub fn encode_timestamp(time: &DateTime<Utc>) -> Option<String> {
    (0..=9999)
        .contains(&time.year())
        .then(|| format!("\"{}\"", time.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}

/// Decode an RFC 3339 string with any offset, normalized to UTC
pub fn decode_timestamp(value: &Value) -> Result<DateTime<Utc>, Malformed> {
    let text = value
        .as_str()
        .ok_or_else(|| Malformed::wrong_type("string", value))?;
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Malformed::InvalidTimestamp {
            text: text.to_string(),
            cause: e.to_string(),
        })
}

// === bytes as base64 ===

/// Encode bytes as a quoted standard-alphabet base64 string
pub fn encode_bytes(bytes: &[u8]) -> String {
    format!(
        "\"{}\"",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Decode a standard-alphabet, padded base64 string
pub fn decode_bytes(value: &Value) -> Result<Vec<u8>, Malformed> {
    let text = value
        .as_str()
        .ok_or_else(|| Malformed::wrong_type("string", value))?;
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| Malformed::InvalidBase64(e.to_string()))
}

// === plain numbers ===

/// Encode a float as a JSON number, or `None` if it is NaN or infinite
///
/// Uses the shortest representation that round-trips, so `10.0` prints as
/// `10`.
pub fn encode_float(value: f64) -> Option<String> {
    value.is_finite().then(|| value.to_string())
}

/// Decode any JSON number as a float
pub fn decode_float(value: &Value) -> Result<f64, Malformed> {
    value
        .as_f64()
        .ok_or_else(|| Malformed::wrong_type("number", value))
}

/// Decode an integral JSON number that fits in 32 bits
pub fn decode_int32(value: &Value) -> Result<i32, Malformed> {
    let number = match value {
        Value::Number(n) => n,
        other => return Err(Malformed::wrong_type("number", other)),
    };
    let wide = number
        .as_i64()
        .ok_or_else(|| Malformed::InvalidInteger(number.to_string()))?;
    i32::try_from(wide).map_err(|_| Malformed::IntegerOutOfRange(number.to_string()))
}
