//! Loosely typed construction inputs and their coercions.
//!
//! Field bags arrive from forms and JSON documents, where a number may be
//! sent as text and a date as a bare calendar day. These types keep the raw
//! value around until the owning entity decides how strict to be.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A numeric field as supplied by the caller
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberInput {
    /// The value if it was supplied as a finite number; text never counts
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NumberInput::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Lenient integer parse
    ///
    /// Numbers truncate toward zero. Text may carry leading whitespace and a
    /// sign; parsing stops at the first non-digit ("72 bpm" is 72). Anything
    /// without leading digits fails.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            NumberInput::Number(n) if n.is_finite() => {
                let truncated = n.trunc();
                if truncated.abs() > i64::MAX as f64 {
                    None
                } else {
                    Some(truncated as i64)
                }
            }
            NumberInput::Number(_) => None,
            NumberInput::Text(text) => parse_leading_int(text),
            NumberInput::Other(_) => None,
        }
    }

    /// A whole, non-negative count given as an integral number or integer text
    pub fn as_count(&self) -> Option<u32> {
        match self {
            NumberInput::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 {
                    Some(*n as u32)
                } else {
                    None
                }
            }
            NumberInput::Text(text) => text.trim().parse().ok(),
            NumberInput::Other(_) => None,
        }
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        NumberInput::Number(f64::from(value))
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        NumberInput::Number(f64::from(value))
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

/// A date field as supplied by the caller
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(DateTime<Utc>),
    /// Milliseconds since the Unix epoch
    Millis(i64),
    Text(String),
    /// Anything else; never resolves to a date
    Other(serde_json::Value),
}

impl DateInput {
    /// Resolve to a UTC instant, if the input names one
    ///
    /// Text accepts RFC 3339, a calendar day (`2024-01-01`, midnight UTC),
    /// or a zone-less date-time read as UTC.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Timestamp(ts) => Some(*ts),
            DateInput::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            DateInput::Text(text) => parse_date_text(text.trim()),
            DateInput::Other(_) => None,
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Serialize a quantity, writing whole values as JSON integers
///
/// `120.0` goes out as `120` so integral inputs come back unchanged;
/// fractional values stay floats.
pub fn serialize_quantity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Render an instant as millisecond-precision ISO-8601 in UTC
/// (`2024-01-01T00:00:00.000Z`)
pub fn format_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
