//! sift - typed filter, ordering and pagination extraction from HTTP
//! query strings
//!
//! A decoded query-parameter map goes in; a typed query description comes
//! out: predicates over schema-resolved attribute paths, an ordered list of
//! sort specifications, and a pagination window. Query execution, HTTP
//! transport, and response serialization are the caller's business.

pub mod observability;
pub mod query;
pub mod schema;

pub use query::{
    Comparator, Direction, OrderSpec, Page, Params, Predicate, QueryError, QueryParser,
    QueryResult, TypedValue,
};
pub use schema::{AttributePath, EntityDef, SchemaLoader, SchemaRegistry, ValueKind};
