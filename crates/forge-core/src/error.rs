//! # Validation Errors
//!
//! Structured rejection reasons for shape declarations, built with
//! `thiserror`. A declaration is rejected as a whole; the per-property
//! reasons travel inside [`ValidationError::Properties`] so a caller sees
//! every failing property at once.

use thiserror::Error;

use crate::visibility::Visibility;

/// Which accessor of a property a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// The `get` accessor.
    Getter,
    /// The `set` accessor.
    Setter,
}

impl std::fmt::Display for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Getter => "getter",
            Self::Setter => "setter",
        })
    }
}

/// Reasons a shape or property declaration is rejected.
///
/// These are never retried: the caller has to fix the declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A shape or property name is not a valid identifier.
    #[error("malformed name \"{0}\" (expected a letter or '_' followed by letters, digits or '_')")]
    MalformedName(String),

    /// A shape name collides with a built-in type.
    #[error("shape name \"{0}\" shadows a built-in type")]
    ReservedName(String),

    /// The shape kind is not one of the supported kinds.
    #[error("unknown shape kind \"{0}\" (expected class, struct, record or interface)")]
    UnknownKind(String),

    /// A visibility string does not name an access level.
    #[error("unknown access modifier \"{0}\" (expected private, protected, internal or public)")]
    UnknownVisibility(String),

    /// Two properties of one shape share a name.
    #[error("property \"{0}\" is declared more than once")]
    DuplicateProperty(String),

    /// A property declares neither a getter nor a setter.
    #[error("property \"{property}\" declares neither a getter nor a setter")]
    MissingAccessors {
        /// The property name.
        property: String,
    },

    /// An accessor is more visible than its property.
    #[error("property \"{property}\": {accessor} visibility {accessor_visibility} is wider than the property visibility {declared}")]
    AccessorTooWide {
        /// The property name.
        property: String,
        /// Which accessor is too wide.
        accessor: Accessor,
        /// The accessor's declared visibility.
        accessor_visibility: Visibility,
        /// The property's declared visibility.
        declared: Visibility,
    },

    /// The property's type name matches neither a built-in type nor a
    /// known shape.
    #[error("property \"{property}\": type \"{type_name}\" cannot be resolved")]
    UnresolvedType {
        /// The property name.
        property: String,
        /// The type name as submitted.
        type_name: String,
    },

    /// The property's type refers back to a shape whose declaration is
    /// still being resolved (including the declaring shape itself).
    #[error("property \"{property}\": type \"{type_name}\" refers back to a shape under declaration")]
    CyclicType {
        /// The property name.
        property: String,
        /// The type name as submitted.
        type_name: String,
    },

    /// Resolution of a property did not run to completion.
    #[error("property \"{property}\": resolution did not complete")]
    Aborted {
        /// The property name.
        property: String,
    },

    /// A property-scoped wrapper around a field-level error.
    #[error("property \"{property}\": {reason}")]
    InvalidProperty {
        /// The property name (as submitted).
        property: String,
        /// The underlying reason.
        reason: Box<ValidationError>,
    },

    /// One or more properties of a shape failed to validate.
    #[error("shape \"{shape}\" rejected: {}", join_failures(.failures))]
    Properties {
        /// The shape name.
        shape: String,
        /// Every property-level failure.
        failures: Vec<ValidationError>,
    },
}

impl ValidationError {
    /// Attach a property name to a field-level error.
    pub fn in_property(self, property: impl Into<String>) -> Self {
        Self::InvalidProperty {
            property: property.into(),
            reason: Box::new(self),
        }
    }

    /// Whether this rejection, or any failure nested in it, is a
    /// [`ValidationError::CyclicType`].
    pub fn is_cyclic(&self) -> bool {
        match self {
            Self::CyclicType { .. } => true,
            Self::InvalidProperty { reason, .. } => reason.is_cyclic(),
            Self::Properties { failures, .. } => failures.iter().any(Self::is_cyclic),
            _ => false,
        }
    }
}

fn join_failures(failures: &[ValidationError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
