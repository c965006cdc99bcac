//! Query description value objects
//!
//! The extraction pipeline produces three immutable artifacts: a list of
//! filter predicates, a list of sort specifications, and a pagination
//! window. All are plain data handed to an external query executor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::AttributePath;

use super::errors::{QueryError, QueryResult};

/// Comparison operators.
///
/// `Eq` and `Like` drive the multi-value collapse rule; the rest are
/// selectable through the `op.` value prefix. The set is closed here but
/// deliberately wider than the collapse rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    /// Equals
    #[serde(rename = "eq")]
    Eq,

    /// Not equals
    #[serde(rename = "neq")]
    NotEq,

    /// Greater than
    #[serde(rename = "gt")]
    Gt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,

    /// Pattern / inclusion match
    #[serde(rename = "like")]
    Like,
}

impl Comparator {
    /// Get the operator string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "eq",
            Comparator::NotEq => "neq",
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
            Comparator::Lt => "lt",
            Comparator::Lte => "lte",
            Comparator::Like => "like",
        }
    }

    /// Look up a comparator by its marker token.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "eq" => Some(Comparator::Eq),
            "neq" => Some(Comparator::NotEq),
            "gt" => Some(Comparator::Gt),
            "gte" => Some(Comparator::Gte),
            "lt" => Some(Comparator::Lt),
            "lte" => Some(Comparator::Lte),
            "like" => Some(Comparator::Like),
            _ => None,
        }
    }
}

/// A coerced, typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    /// Passthrough string
    Text(String),
    /// Boolean
    Bool(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Enum variant name, validated against the schema
    Enum(String),
    /// Ordered values of a collapsed multi-value predicate
    List(Vec<TypedValue>),
}

/// One filter predicate: a typed value compared against an attribute path.
///
/// A `Like` predicate produced by multi-value collapse carries a
/// `TypedValue::List`; every other built predicate carries a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    /// Coerced comparison value
    pub value: TypedValue,
    /// Comparison operator
    pub comparator: Comparator,
    /// Resolved attribute path
    pub path: AttributePath,
}

impl Predicate {
    /// Create a predicate.
    pub fn new(value: TypedValue, comparator: Comparator, path: AttributePath) -> Self {
        Self {
            value,
            comparator,
            path,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl Direction {
    /// Parse a direction token case-insensitively; unknown tokens fail.
    pub fn parse(token: &str) -> QueryResult<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Ok(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Ok(Direction::Desc)
        } else {
            Err(QueryError::InvalidDirection(token.to_string()))
        }
    }
}

/// One sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSpec {
    /// Sort direction
    pub direction: Direction,
    /// Resolved attribute path
    pub path: AttributePath,
}

/// Pagination window. `{0, 0}` means no pagination was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number
    pub page: u64,
    /// Records per page
    pub per_page: u64,
}

impl Page {
    /// The zero window: no pagination requested.
    pub fn none() -> Self {
        Self { page: 0, per_page: 0 }
    }

    /// Whether this window requests no pagination.
    pub fn is_none(&self) -> bool {
        self.page == 0 && self.per_page == 0
    }
}
