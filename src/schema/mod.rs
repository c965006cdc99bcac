//! Schema registry subsystem
//!
//! Entities, their fields, and the field kinds are declared up front in an
//! explicit registry. Field-name resolution walks the registry; there is no
//! runtime reflection and no per-value type inspection.
//!
//! # Design Principles
//!
//! - Registry is immutable once built
//! - Dotted field names traverse relations segment by segment
//! - Resolution failure is `None`, never an error
//! - Relation targets are validated after loading

mod errors;
mod loader;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use registry::SchemaRegistry;
pub use types::{AttributePath, AttributeStep, EntityDef, ValueKind};
