//! Query extraction subsystem
//!
//! Translates a decoded HTTP query-parameter map into a typed query
//! description: filter predicates, sort specifications, and a pagination
//! window. Field names resolve against the schema registry; raw values are
//! sniffed for comparator markers and coerced to their declared kinds.

pub mod builder;
pub mod coerce;
pub mod errors;
pub mod parser;
pub mod record;
pub mod types;

pub use coerce::CoerceConfig;
pub use errors::{QueryError, QueryResult};
pub use parser::{Params, QueryParser, RESERVED_PARAMS};
pub use record::RawRecord;
pub use types::{Comparator, Direction, OrderSpec, Page, Predicate, TypedValue};
