//! Type coercion from raw strings to typed values
//!
//! Dispatch is over the declared `ValueKind` recorded in the schema
//! registry. Enum and date coercion fail loudly; boolean coercion is
//! deliberately lenient (anything that is not `true` is `false`); every
//! other kind passes the raw string through unchanged.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::schema::ValueKind;

use super::errors::{QueryError, QueryResult};
use super::types::TypedValue;

/// Coercion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CoerceConfig {
    /// Separator between the year, month, and day components of a date
    #[serde(default = "default_date_separator")]
    pub date_separator: char,
}

fn default_date_separator() -> char {
    '-'
}

impl Default for CoerceConfig {
    fn default() -> Self {
        Self {
            date_separator: default_date_separator(),
        }
    }
}

/// Coerce one raw string into the typed value the attribute kind calls for.
///
/// `path` is only used to label errors.
pub fn coerce(
    raw: &str,
    kind: &ValueKind,
    cfg: &CoerceConfig,
    path: &str,
) -> QueryResult<TypedValue> {
    match kind {
        ValueKind::Enum { variants } => coerce_enum(raw, variants, path),
        ValueKind::Bool => Ok(TypedValue::Bool(raw.eq_ignore_ascii_case("true"))),
        ValueKind::Date => coerce_date(raw, cfg.date_separator),
        _ => Ok(TypedValue::Text(raw.to_string())),
    }
}

fn coerce_enum(raw: &str, variants: &[String], path: &str) -> QueryResult<TypedValue> {
    if variants.iter().any(|v| v == raw) {
        Ok(TypedValue::Enum(raw.to_string()))
    } else {
        Err(QueryError::UnknownEnumMember {
            path: path.to_string(),
            value: raw.to_string(),
        })
    }
}

fn coerce_date(raw: &str, separator: char) -> QueryResult<TypedValue> {
    let parts: Vec<&str> = raw.split(separator).collect();
    if parts.len() != 3 {
        return Err(QueryError::InvalidDate(raw.to_string()));
    }

    let year: i32 = parts[0]
        .parse()
        .map_err(|_| QueryError::InvalidDate(raw.to_string()))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|_| QueryError::InvalidDate(raw.to_string()))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|_| QueryError::InvalidDate(raw.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(TypedValue::Date)
        .ok_or_else(|| QueryError::InvalidDate(raw.to_string()))
}
