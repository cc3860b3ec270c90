//! # Shape Kinds

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The kind of type a shape declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ShapeKind {
    /// Reference type.
    Class,
    /// Value type: members of this kind default to a nested default
    /// instance rather than null.
    Struct,
    /// Reference type with value semantics.
    Record,
    /// Contract only. Never instantiable.
    Interface,
}

impl ShapeKind {
    /// Keyword used in documents and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::Interface => "interface",
        }
    }

    /// Whether a member of this kind defaults to null.
    pub fn is_reference(&self) -> bool {
        !matches!(self, Self::Struct)
    }

    /// Whether instances of this kind can be constructed.
    pub fn is_instantiable(&self) -> bool {
        !matches!(self, Self::Interface)
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Class
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "record" => Ok(Self::Record),
            "interface" => Ok(Self::Interface),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}
