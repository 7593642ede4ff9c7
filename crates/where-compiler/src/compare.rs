//! Loose comparison between column values and clause operands.
//!
//! Query builders hand over loosely typed operands (a numeric column compared
//! with `"18"`, a date column compared with `"2024-01-01"`), so equality and
//! ordering coerce across types with these rules:
//!
//! - null is equal only to null, and never orders against anything;
//! - two strings compare as text;
//! - a date or timestamp against anything compares chronologically, parsing
//!   the other side when it is a string;
//! - everything else compares numerically, booleans as 1/0 and strings
//!   trimmed with the empty string as 0. A string that is not a number is
//!   unequal to every number and unordered against it.

use model::Value;
use std::cmp::Ordering;

pub fn loose_eq(left: &Value, right: &Value) -> bool {
    use Value::*;

    match (left, right) {
        (Null, Null) => true,
        (Null, _) | (_, Null) => false,
        (String(l), String(r)) => l == r,
        (Boolean(l), Boolean(r)) => l == r,
        _ => loose_cmp(left, right) == Some(Ordering::Equal),
    }
}

pub fn loose_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::*;

    match (left, right) {
        (Null, _) | (_, Null) => None,
        (String(l), String(r)) => Some(l.cmp(r)),
        (Date(_) | Timestamp(_), _) | (_, Date(_) | Timestamp(_)) => temporal_cmp(left, right),
        _ => numeric_cmp(left, right),
    }
}

fn temporal_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::*;

    match (left, right) {
        (Timestamp(_), _) | (_, Timestamp(_)) => {
            Some(left.as_timestamp()?.cmp(&right.as_timestamp()?))
        }
        _ => Some(left.as_date()?.cmp(&right.as_date()?)),
    }
}

fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    use Value::*;

    // Integer pairs compare exactly; everything else goes through f64.
    match (left, right) {
        (Int(l), Int(r)) => Some(l.cmp(r)),
        (Uint(l), Uint(r)) => Some(l.cmp(r)),
        (Int(l), Uint(r)) => Some(i128::from(*l).cmp(&i128::from(*r))),
        (Uint(l), Int(r)) => Some(i128::from(*l).cmp(&i128::from(*r))),
        _ => left.as_f64()?.partial_cmp(&right.as_f64()?),
    }
}

/// Text form of a value for pattern matching. Null has none.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Uint(u) => Some(u.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Date(d) => Some(d.to_string()),
        Value::Timestamp(t) => Some(t.to_rfc3339()),
    }
}
