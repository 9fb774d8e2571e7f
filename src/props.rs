//! Front-matter property values.
//!
//! This module defines the runtime representation of front-matter values
//! used for metadata columns and property-based sorting. Values form a
//! small closed set of variants, each with an explicit comparison rule;
//! anything outside the set (booleans, lists, nested maps) is not
//! representable and falls out of property sorting entirely.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

/// Runtime representation of a front-matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Free-form text (e.g. `author: jane`)
    Text(String),

    /// Numeric value (e.g. `priority: 2`)
    Number(f64),

    /// Point in time (e.g. `due: 2024-03-01`)
    Date(DateTime<Utc>),
}

impl PropValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            PropValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Compare two values of the same variant.
    ///
    /// Returns `None` when the variants differ; the caller falls back to
    /// name comparison in that case. Text compares case-insensitively.
    pub fn cmp_same_kind(&self, other: &PropValue) -> Option<Ordering> {
        match (self, other) {
            (PropValue::Text(a), PropValue::Text(b)) => {
                Some(a.to_lowercase().cmp(&b.to_lowercase()))
            }
            (PropValue::Number(a), PropValue::Number(b)) => {
                Some(a.partial_cmp(b).unwrap_or(Ordering::Equal))
            }
            (PropValue::Date(a), PropValue::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Convert a parsed YAML value into a property value.
    ///
    /// Numbers map to [`PropValue::Number`]. Strings that parse as an
    /// RFC 3339 timestamp or a plain `YYYY-MM-DD` date become
    /// [`PropValue::Date`]; all other strings are [`PropValue::Text`].
    /// Booleans, sequences, and mappings have no property representation
    /// and return `None`.
    pub fn from_yaml(value: &serde_yaml::Value) -> Option<PropValue> {
        match value {
            serde_yaml::Value::Number(n) => n.as_f64().map(PropValue::Number),
            serde_yaml::Value::String(s) => Some(match parse_date(s) {
                Some(date) => PropValue::Date(date),
                None => PropValue::Text(s.clone()),
            }),
            _ => None,
        }
    }

    /// Render the value back into YAML for front-matter persistence.
    pub fn to_yaml(&self) -> serde_yaml::Value {
        match self {
            PropValue::Text(s) => serde_yaml::Value::String(s.clone()),
            PropValue::Number(n) => {
                // whole numbers persist without a fractional suffix
                let number = if n.is_finite() && n.fract() == 0.0 {
                    serde_yaml::Number::from(*n as i64)
                } else {
                    serde_yaml::Number::from(*n)
                };
                serde_yaml::Value::Number(number)
            }
            PropValue::Date(d) => serde_yaml::Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
