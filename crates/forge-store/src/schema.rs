//! # Document Schema
//!
//! Canonical documents are checked against `schemas/class-declaration.schema.json`
//! (JSON Schema draft 2020-12) before every write and after every read. The
//! schema is embedded at compile time and compiled once per store.

use jsonschema::Validator;
use serde_json::Value;

use crate::error::StoreError;

const CLASS_DECLARATION_SCHEMA: &str = include_str!("../schemas/class-declaration.schema.json");

/// Compiled validator for canonical declaration documents.
pub struct DocumentSchema {
    validator: Validator,
}

impl std::fmt::Debug for DocumentSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSchema").finish_non_exhaustive()
    }
}

impl DocumentSchema {
    /// Compile the embedded declaration schema.
    pub fn embedded() -> Result<Self, StoreError> {
        let schema: Value = serde_json::from_str(CLASS_DECLARATION_SCHEMA)
            .map_err(|e| StoreError::SchemaBuild(e.to_string()))?;
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| StoreError::SchemaBuild(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check `instance` as the document for declaration `name`.
    pub fn check(&self, name: &str, instance: &Value) -> Result<(), StoreError> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("(root): {e}")
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Schema {
                name: name.to_string(),
                violations,
            })
        }
    }
}
