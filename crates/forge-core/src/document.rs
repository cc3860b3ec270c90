//! # Canonical Declaration Document
//!
//! The persisted, machine-readable form of a validated shape declaration.
//! This is the source of truth in the declaration store; the readable
//! listing and every live type are regenerated from it.
//!
//! Visibilities are stored as normalized lowercase names. Absent accessors
//! are omitted rather than written as empty strings. Documents written before
//! shape kind and shape visibility were recorded still load: the two fields
//! default to `class` and `public`.

use serde::{Deserialize, Serialize};

use crate::dto::{ObjectDataDto, PropertyDataDto};
use crate::kind::ShapeKind;
use crate::visibility::Visibility;

/// Canonical document for one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDocument {
    pub name: String,
    #[serde(default)]
    pub access_modifier: Visibility,
    #[serde(default)]
    pub data_type: ShapeKind,
    #[serde(default)]
    pub properties: Vec<PropertyDocument>,
}

/// Canonical document for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDocument {
    pub name: String,
    /// Normalized type spelling: the built-in keyword (`int`, `string`) or
    /// the referenced shape's name.
    pub property_type: String,
    pub access_modifier: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter_access_modifier: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_access_modifier: Option<Visibility>,
}

impl PropertyDocument {
    /// Whether the property has no setter.
    pub fn is_read_only(&self) -> bool {
        self.setter_access_modifier.is_none()
    }
}

impl ClassDocument {
    /// Render as the wire DTO returned to callers.
    pub fn to_dto(&self) -> ObjectDataDto {
        ObjectDataDto {
            name: self.name.clone(),
            data_type: self.data_type.as_str().to_string(),
            access_modifier: self.access_modifier.as_str().to_string(),
            properties: self.properties.iter().map(PropertyDocument::to_dto).collect(),
        }
    }
}

impl PropertyDocument {
    /// Render as the wire DTO returned to callers.
    pub fn to_dto(&self) -> PropertyDataDto {
        let accessor = |v: Option<Visibility>| v.map(|v| v.as_str().to_string()).unwrap_or_default();
        PropertyDataDto {
            name: self.name.clone(),
            property_type: self.property_type.clone(),
            access_modifier: self.access_modifier.as_str().to_string(),
            getter_access_modifier: accessor(self.getter_access_modifier),
            setter_access_modifier: accessor(self.setter_access_modifier),
        }
    }
}

impl From<&ClassDocument> for ObjectDataDto {
    fn from(doc: &ClassDocument) -> Self {
        doc.to_dto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data2() -> ClassDocument {
        ClassDocument {
            name: "Data2".into(),
            access_modifier: Visibility::Public,
            data_type: ShapeKind::Class,
            properties: vec![PropertyDocument {
                name: "StringValue".into(),
                property_type: "string".into(),
                access_modifier: Visibility::Public,
                getter_access_modifier: Some(Visibility::Public),
                setter_access_modifier: None,
            }],
        }
    }

    #[test]
    fn absent_accessor_is_omitted() {
        let value = serde_json::to_value(data2()).unwrap();
        let prop = &value["properties"][0];
        assert_eq!(prop["getterAccessModifier"], "public");
        assert!(prop.get("setterAccessModifier").is_none());
    }

    #[test]
    fn legacy_document_defaults_kind_and_visibility() {
        let doc: ClassDocument = serde_json::from_value(json!({
            "name": "Data1",
            "properties": [{
                "name": "IntegerValue",
                "propertyType": "int",
                "accessModifier": "public",
                "getterAccessModifier": "public",
                "setterAccessModifier": "public"
            }]
        }))
        .unwrap();
        assert_eq!(doc.data_type, ShapeKind::Class);
        assert_eq!(doc.access_modifier, Visibility::Public);
        assert!(!doc.properties[0].is_read_only());
    }

    #[test]
    fn to_dto_uses_empty_string_for_absent_accessor() {
        let dto = data2().to_dto();
        assert_eq!(dto.data_type, "class");
        assert_eq!(dto.properties[0].getter_access_modifier, "public");
        assert_eq!(dto.properties[0].setter_access_modifier, "");
    }
}
