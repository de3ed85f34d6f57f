//! Field value casting.
//!
//! The remote reporting service returns every field value as a string
//! regardless of its declared type. This module is the single seam that
//! restores type information, keyed by field name, so that new metric names
//! added to presets pick up the right typing without touching call sites.

use chrono::NaiveDate;
use thiserror::Error;

use crate::row::Value;

/// How a field's raw string value is reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastRule {
    /// Base-10 count, coerced best-effort.
    Integer,
    /// Strict `YYYYMMDD` calendar date.
    Date,
    /// Identity pass-through.
    Text,
}

#[derive(Debug, Error)]
pub enum CastError {
    #[error("invalid report date {value:?}: expected 8 digits in YYYYMMDD form")]
    InvalidDate { value: String },
}

/// Look up the casting rule for a field name.
///
/// The mapping is a fixed table: the known count-like fields become integers,
/// `date` becomes a calendar date, everything else stays text. Extend the
/// table when presets grow new numeric fields.
pub fn rule_for(field: &str) -> CastRule {
    match field {
        "date" => CastRule::Date,
        "visitors" | "pageViews" | "activeUsers" | "newUsers" | "screenPageViews"
        | "active1DayUsers" | "active7DayUsers" | "active28DayUsers" => CastRule::Integer,
        _ => CastRule::Text,
    }
}

/// Cast one raw field value per [`rule_for`].
///
/// Integer fields never fail: a value that does not parse as a whole `i64`
/// falls back to its longest leading signed-digit prefix, and to 0 when no
/// digits lead at all, so one malformed metric cannot abort a whole report.
/// A malformed `date` value violates the remote service's contract and is a
/// hard error.
pub fn cast_value(field: &str, raw: &str) -> Result<Value, CastError> {
    match rule_for(field) {
        CastRule::Integer => Ok(Value::Integer(coerce_int(raw))),
        CastRule::Date => parse_report_date(raw).map(Value::Date),
        CastRule::Text => Ok(Value::Text(raw.to_string())),
    }
}

fn parse_report_date(raw: &str) -> Result<NaiveDate, CastError> {
    let invalid = || CastError::InvalidDate {
        value: raw.to_string(),
    };
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d").map_err(|_| invalid())
}

fn coerce_int(raw: &str) -> i64 {
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
