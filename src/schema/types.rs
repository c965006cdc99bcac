//! Schema type definitions
//!
//! Supported semantic value kinds:
//! - text: UTF-8 string, passed through coercion unchanged
//! - bool: Boolean
//! - date: calendar date (year-month-day)
//! - enum: closed set of named variants
//! - list: homogeneous collection with an element kind
//! - relation: navigable reference to another entity

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic value kind of a schema attribute.
///
/// The kind drives type coercion: it is resolved once when the registry is
/// built, never per value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueKind {
    /// UTF-8 string
    Text,
    /// Boolean
    Bool,
    /// Calendar date
    Date,
    /// Closed set of named variants
    Enum {
        /// Accepted variant names, matched exactly
        variants: Vec<String>,
    },
    /// Homogeneous collection with a single element kind
    List {
        /// Element kind (boxed to allow nesting)
        element: Box<ValueKind>,
    },
    /// Navigable reference to another entity
    Relation {
        /// Target entity name
        entity: String,
    },
}

impl ValueKind {
    /// Returns the kind name for error messages and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Date => "date",
            ValueKind::Enum { .. } => "enum",
            ValueKind::List { .. } => "list",
            ValueKind::Relation { .. } => "relation",
        }
    }

    /// Returns the entity a traversal through this attribute lands on, if
    /// the attribute is navigable. Collections of relations navigate to
    /// their element's target.
    pub fn relation_target(&self) -> Option<&str> {
        match self {
            ValueKind::Relation { entity } => Some(entity),
            ValueKind::List { element } => element.relation_target(),
            _ => None,
        }
    }
}

/// Entity definition: a named field map plus the identifier field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Unique entity name
    pub name: String,
    /// Identifier field name, targeted by the `id`/`ids[]` aliases
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Field definitions
    pub fields: HashMap<String, ValueKind>,
}

fn default_id_field() -> String {
    "id".to_string()
}

impl EntityDef {
    /// Create an entity definition with the default `id` identifier field.
    pub fn new(name: impl Into<String>, fields: HashMap<String, ValueKind>) -> Self {
        Self {
            name: name.into(),
            id_field: default_id_field(),
            fields,
        }
    }
}

/// One step of a resolved attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeStep {
    /// Field name within its owning entity
    pub name: String,
    /// Declared value kind
    pub kind: ValueKind,
}

/// An ordered, non-empty traversal from the root entity through zero or
/// more relations to a terminal field.
///
/// Intermediate steps are navigation-only; the terminal step carries the
/// declared value kind consulted during coercion. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributePath {
    steps: Vec<AttributeStep>,
}

impl AttributePath {
    /// Build a path from resolved steps. Panics on an empty step list,
    /// which the resolver never produces.
    pub(crate) fn new(steps: Vec<AttributeStep>) -> Self {
        assert!(!steps.is_empty(), "attribute path must be non-empty");
        Self { steps }
    }

    /// All steps, root first.
    pub fn steps(&self) -> &[AttributeStep] {
        &self.steps
    }

    /// The terminal step.
    pub fn terminal(&self) -> &AttributeStep {
        // Invariant: steps is non-empty
        self.steps.last().expect("attribute path is non-empty")
    }

    /// Whether the terminal attribute is a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.terminal().kind, ValueKind::List { .. })
    }

    /// The kind coercion should target: the element kind when the terminal
    /// attribute is a collection, otherwise its declared kind.
    pub fn semantic_kind(&self) -> &ValueKind {
        match &self.terminal().kind {
            ValueKind::List { element } => element,
            kind => kind,
        }
    }

    /// Dotted rendering of the traversal, for logs and error messages.
    pub fn dotted(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_step(name: &str) -> AttributeStep {
        AttributeStep {
            name: name.to_string(),
            kind: ValueKind::Text,
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Text.kind_name(), "text");
        assert_eq!(ValueKind::Bool.kind_name(), "bool");
        assert_eq!(ValueKind::Date.kind_name(), "date");
        assert_eq!(ValueKind::Enum { variants: vec![] }.kind_name(), "enum");
        assert_eq!(
            ValueKind::List {
                element: Box::new(ValueKind::Text)
            }
            .kind_name(),
            "list"
        );
    }

    #[test]
    fn test_relation_target_through_list() {
        let kind = ValueKind::List {
            element: Box::new(ValueKind::Relation {
                entity: "album".to_string(),
            }),
        };
        assert_eq!(kind.relation_target(), Some("album"));
        assert_eq!(ValueKind::Text.relation_target(), None);
    }

    #[test]
    fn test_path_terminal_and_dotted() {
        let path = AttributePath::new(vec![
            AttributeStep {
                name: "album".to_string(),
                kind: ValueKind::Relation {
                    entity: "album".to_string(),
                },
            },
            text_step("name"),
        ]);
        assert_eq!(path.terminal().name, "name");
        assert_eq!(path.dotted(), "album.name");
        assert!(!path.is_collection());
    }

    #[test]
    fn test_semantic_kind_unwraps_collections() {
        let path = AttributePath::new(vec![AttributeStep {
            name: "tags".to_string(),
            kind: ValueKind::List {
                element: Box::new(ValueKind::Text),
            },
        }]);
        assert!(path.is_collection());
        assert_eq!(path.semantic_kind(), &ValueKind::Text);
    }

    #[test]
    fn test_entity_def_defaults_id_field() {
        let entity = EntityDef::new("track", HashMap::new());
        assert_eq!(entity.id_field, "id");
    }

    #[test]
    fn test_value_kind_json_round_trip() {
        let kind = ValueKind::Enum {
            variants: vec!["active".to_string(), "archived".to_string()],
        };
        let json = serde_json::to_string(&kind).unwrap();
        let back: ValueKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
