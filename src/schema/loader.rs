//! Schema loader for building a registry from entity definition files
//!
//! Definitions are JSON documents, one entity per file, loaded at startup.
//! A missing directory yields an empty registry; a malformed or duplicate
//! definition fails the whole load.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{SchemaError, SchemaResult};
use super::registry::SchemaRegistry;
use super::types::EntityDef;

/// Loads entity definition files from a directory into a `SchemaRegistry`.
pub struct SchemaLoader {
    /// Directory containing `*.json` entity definitions
    definition_dir: PathBuf,
}

impl SchemaLoader {
    /// Create a loader reading definitions from the given directory.
    pub fn new(definition_dir: &Path) -> Self {
        Self {
            definition_dir: definition_dir.to_path_buf(),
        }
    }

    /// Returns the definition directory path.
    pub fn definition_dir(&self) -> &Path {
        &self.definition_dir
    }

    /// Parse a single entity definition from a JSON document.
    pub fn from_json(json: &str) -> SchemaResult<EntityDef> {
        serde_json::from_str(json).map_err(|e| SchemaError::MalformedDefinition {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Load every `*.json` file in the definition directory and validate
    /// the resulting registry's relation targets.
    pub fn load_all(&self) -> SchemaResult<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();

        if !self.definition_dir.exists() {
            return Ok(registry);
        }

        let entries = fs::read_dir(&self.definition_dir).map_err(|e| SchemaError::Io {
            path: self.definition_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::Io {
                path: self.definition_dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            let entity = self.load_definition_file(&path)?;
            registry.register(entity)?;
        }

        registry.validate()?;
        Ok(registry)
    }

    fn load_definition_file(&self, path: &Path) -> SchemaResult<EntityDef> {
        let contents = fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| SchemaError::MalformedDefinition {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
