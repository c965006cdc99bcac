//! Explicit schema registry
//!
//! Maps entity name to entity definition and resolves dotted field names
//! into attribute paths. Replaces runtime metamodel reflection: every kind
//! is recorded statically when the registry is built, so resolution is a
//! plain map walk with no per-value type inspection.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::{AttributePath, AttributeStep, EntityDef};

/// Registry of entity definitions, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entities: HashMap<String, EntityDef>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition.
    ///
    /// Rejects duplicate entity names and definitions whose declared
    /// identifier field is absent from the field map.
    pub fn register(&mut self, entity: EntityDef) -> SchemaResult<()> {
        if self.entities.contains_key(&entity.name) {
            return Err(SchemaError::DuplicateEntity(entity.name));
        }
        if !entity.fields.contains_key(&entity.id_field) {
            return Err(SchemaError::MissingIdentifierField {
                entity: entity.name,
                id_field: entity.id_field,
            });
        }
        self.entities.insert(entity.name.clone(), entity);
        Ok(())
    }

    /// Look up an entity definition by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    /// The identifier field name for an entity, or the `id` default when
    /// the entity is unknown.
    pub fn id_field(&self, entity: &str) -> &str {
        self.entities
            .get(entity)
            .map_or("id", |e| e.id_field.as_str())
    }

    /// Resolve a possibly dotted field name against an entity into an
    /// attribute path.
    ///
    /// Every non-terminal segment must be a relation (or a collection of
    /// relations) into a registered entity; the terminal segment may be any
    /// attribute. Returns `None` when the entity is unknown, a segment is
    /// missing, or a non-terminal segment is not navigable.
    pub fn resolve(&self, entity: &str, field: &str) -> Option<AttributePath> {
        let mut current = self.entities.get(entity)?;
        let segments: Vec<&str> = field.split('.').collect();
        let mut steps = Vec::with_capacity(segments.len());

        for (i, segment) in segments.iter().enumerate() {
            let kind = current.fields.get(*segment)?;
            steps.push(AttributeStep {
                name: (*segment).to_string(),
                kind: kind.clone(),
            });
            if i + 1 < segments.len() {
                let target = kind.relation_target()?;
                current = self.entities.get(target)?;
            }
        }

        Some(AttributePath::new(steps))
    }

    /// Check that every relation attribute points at a registered entity.
    ///
    /// Called by the loader after all definitions are in; individual
    /// `register` calls cannot see forward references.
    pub fn validate(&self) -> SchemaResult<()> {
        for entity in self.entities.values() {
            for (field, kind) in &entity.fields {
                if let Some(target) = kind.relation_target() {
                    if !self.entities.contains_key(target) {
                        return Err(SchemaError::UnknownRelationTarget {
                            entity: entity.name.clone(),
                            field: field.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
