//! Query extraction errors
//!
//! Only coercion and control-parameter failures are errors. A filter or
//! sort field that does not resolve against the schema is logged and
//! skipped, never raised.

use thiserror::Error;

/// Result type for query extraction operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while extracting a query description
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// `page` or `per_page` value is not a non-negative integer
    #[error("Invalid pagination value: {0}")]
    InvalidPageNumber(String),

    /// Raw value does not name a variant of the attribute's enum
    #[error("Unknown enum member '{value}' for {path}")]
    UnknownEnumMember { path: String, value: String },

    /// Raw value is not a year-month-day date under the configured separator
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// `direction` value is neither `asc` nor `desc`
    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),
}
