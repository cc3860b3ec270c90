//! Error types for synthesis, instance access and the object handler.

use forge_core::{Accessor, ShapeKind, ValidationError, Visibility};
use forge_store::StoreError;
use thiserror::Error;

/// A canonical declaration could not be realized as a live type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    /// A member shares the name of its enclosing shape.
    #[error("shape \"{shape}\": member \"{member}\" has the same name as its enclosing shape")]
    MemberNamedAfterShape { shape: String, member: String },

    /// Two members share a name.
    #[error("shape \"{shape}\": member \"{member}\" is defined more than once")]
    DuplicateMember { shape: String, member: String },

    /// The shape kind cannot be instantiated.
    #[error("shape \"{shape}\" of kind {kind} cannot be instantiated")]
    NotInstantiable { shape: String, kind: ShapeKind },

    /// A construction-time initializer was rejected.
    #[error("shape \"{shape}\": initialization failed: {source}")]
    Initialization {
        shape: String,
        #[source]
        source: AccessError,
    },
}

/// A member access on an instance was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// No member of that name.
    #[error("shape \"{shape}\" has no member \"{member}\"")]
    UnknownMember { shape: String, member: String },

    /// The member has no accessor of that kind.
    #[error("member \"{member}\" has no {accessor}")]
    MissingAccessor { member: String, accessor: Accessor },

    /// The accessor is not visible from the caller's scope.
    #[error("{accessor} of member \"{member}\" is {visibility}, not accessible from {scope} scope")]
    Inaccessible {
        member: String,
        accessor: Accessor,
        visibility: Visibility,
        scope: Visibility,
    },

    /// The value does not fit the member's type.
    #[error("member \"{member}\" of type {expected} cannot hold {found}")]
    TypeMismatch {
        member: String,
        expected: String,
        found: String,
    },
}

/// Failures surfaced by [`ObjectHandler`](crate::ObjectHandler).
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The declaration was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The declaration is valid but cannot be realized.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// `add` of a name that is already stored.
    #[error("declaration \"{0}\" already exists")]
    AlreadyExists(String),

    /// The named declaration is not stored.
    #[error("declaration \"{0}\" not found")]
    NotFound(String),

    /// The store failed.
    #[error("declaration store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(name) => Self::AlreadyExists(name),
            StoreError::NotFound(name) => Self::NotFound(name),
            StoreError::InvalidName(name) => Self::Validation(ValidationError::MalformedName(name)),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_conflicts_become_handler_variants() {
        assert!(matches!(
            HandlerError::from(StoreError::AlreadyExists("Data1".into())),
            HandlerError::AlreadyExists(name) if name == "Data1"
        ));
        assert!(matches!(
            HandlerError::from(StoreError::NotFound("Data1".into())),
            HandlerError::NotFound(_)
        ));
        assert!(matches!(
            HandlerError::from(StoreError::InvalidName("a b".into())),
            HandlerError::Validation(ValidationError::MalformedName(_))
        ));
    }

    #[test]
    fn inaccessible_display() {
        let err = AccessError::Inaccessible {
            member: "Secret".into(),
            accessor: Accessor::Getter,
            visibility: Visibility::Private,
            scope: Visibility::Public,
        };
        assert_eq!(
            err.to_string(),
            "getter of member \"Secret\" is private, not accessible from public scope"
        );
    }
}
