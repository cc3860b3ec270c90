//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request bodies and helpers to
//! extract and pre-check JSON bodies in handlers. The checks here only
//! catch requests that are obviously incomplete; full declaration
//! validation happens in the object handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use forge_core::ObjectDataDto;

use crate::error::AppError;

/// Upper bound on properties per declaration.
pub const MAX_PROPERTIES: usize = 512;

/// Request types that can check themselves beyond what serde enforces.
pub trait Validate {
    /// Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ObjectDataDto {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.properties.len() > MAX_PROPERTIES {
            return Err(format!(
                "a declaration may have at most {MAX_PROPERTIES} properties, got {}",
                self.properties.len()
            ));
        }
        Ok(())
    }
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and check it with [`Validate`].
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}
