//! Schema error types
//!
//! Loading and validating entity definitions can fail; resolving a field
//! name cannot. Resolution failure is a first-class `None` handled by the
//! query parser, not an error in this taxonomy.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building the schema registry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Entity definition document could not be parsed
    #[error("Malformed entity definition {path}: {reason}")]
    MalformedDefinition { path: String, reason: String },

    /// Two definitions claim the same entity name
    #[error("Duplicate entity definition: {0}")]
    DuplicateEntity(String),

    /// A relation attribute points at an entity the registry does not hold
    #[error("Unknown relation target '{target}' referenced by {entity}.{field}")]
    UnknownRelationTarget {
        entity: String,
        field: String,
        target: String,
    },

    /// An entity's declared identifier field is missing from its field map
    #[error("Entity '{entity}' does not define its identifier field '{id_field}'")]
    MissingIdentifierField { entity: String, id_field: String },

    /// Definition directory or file could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}
