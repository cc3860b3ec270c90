//! # Canonical In-Memory Declarations
//!
//! [`ClassSpec`] and [`PropertySpec`] are what the validator produces: every
//! string of the request decoded, every type resolved. They convert back to
//! the wire DTO and forward to the persisted [`ClassDocument`].

use std::sync::Arc;

use forge_core::{
    ClassDocument, ObjectDataDto, Primitive, PropertyDataDto, PropertyDocument, ShapeKind,
    Visibility,
};

use crate::synth::LiveType;

/// The resolved type of a property.
#[derive(Debug, Clone)]
pub enum TypeReference {
    /// A built-in type.
    Primitive(Primitive),
    /// A previously synthesized shape.
    Shape(Arc<LiveType>),
}

impl TypeReference {
    /// Spelling used in documents and listings.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Primitive(p) => p.display_name(),
            Self::Shape(live) => live.name(),
        }
    }

    /// Whether members of this type default to null.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_reference(),
            Self::Shape(live) => live.kind().is_reference(),
        }
    }
}

impl PartialEq for TypeReference {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            (Self::Shape(a), Self::Shape(b)) => a.name().eq_ignore_ascii_case(b.name()),
            _ => false,
        }
    }
}

/// A validated property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub type_ref: TypeReference,
    pub visibility: Visibility,
    pub getter: Option<Visibility>,
    pub setter: Option<Visibility>,
}

impl PropertySpec {
    /// A property without a setter is fixed at construction.
    pub fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }

    pub fn to_dto(&self) -> PropertyDataDto {
        self.to_document().to_dto()
    }

    pub fn to_document(&self) -> PropertyDocument {
        PropertyDocument {
            name: self.name.clone(),
            property_type: self.type_ref.display_name().to_string(),
            access_modifier: self.visibility,
            getter_access_modifier: self.getter,
            setter_access_modifier: self.setter,
        }
    }
}

/// A validated shape declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub name: String,
    pub visibility: Visibility,
    pub kind: ShapeKind,
    pub properties: Vec<PropertySpec>,
}

impl ClassSpec {
    pub fn to_dto(&self) -> ObjectDataDto {
        self.to_document().to_dto()
    }

    /// The canonical document persisted for this shape.
    pub fn to_document(&self) -> ClassDocument {
        ClassDocument {
            name: self.name.clone(),
            access_modifier: self.visibility,
            data_type: self.kind,
            properties: self.properties.iter().map(PropertySpec::to_document).collect(),
        }
    }
}
