//! # Declaration DTOs
//!
//! The wire shape of a declaration request and of a declaration read back.
//! Every field is a plain string so that malformed input reaches the
//! validator (and gets a precise rejection reason) instead of failing
//! deserialization. An empty accessor modifier means "no such accessor".

use serde::{Deserialize, Serialize};

/// A shape declaration as submitted by, or returned to, a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ObjectDataDto {
    /// Shape name, used as the type name and the storage key.
    #[serde(default)]
    pub name: String,
    /// Shape kind: `class`, `struct`, `record` or `interface`.
    #[serde(default)]
    pub data_type: String,
    /// Shape visibility.
    #[serde(default)]
    pub access_modifier: String,
    /// Declared properties.
    #[serde(default, alias = "propertyData")]
    pub properties: Vec<PropertyDataDto>,
}

/// One property of a shape declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PropertyDataDto {
    /// Property name.
    #[serde(default)]
    pub name: String,
    /// Built-in type (`int`, `string`, `Guid`, ...) or a declared shape name.
    #[serde(default)]
    pub property_type: String,
    /// Property visibility.
    #[serde(default)]
    pub access_modifier: String,
    /// Getter visibility; empty when there is no getter.
    #[serde(default)]
    pub getter_access_modifier: String,
    /// Setter visibility; empty when the property is read-only.
    #[serde(default)]
    pub setter_access_modifier: String,
}

impl PropertyDataDto {
    /// Shorthand used by tests and fixtures.
    pub fn new(
        name: &str,
        property_type: &str,
        access_modifier: &str,
        getter: &str,
        setter: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            property_type: property_type.to_string(),
            access_modifier: access_modifier.to_string(),
            getter_access_modifier: getter.to_string(),
            setter_access_modifier: setter.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_request_shape() {
        let dto: ObjectDataDto = serde_json::from_value(json!({
            "name": "Data1",
            "dataType": "class",
            "accessModifier": "public",
            "properties": [{
                "name": "IntegerValue",
                "propertyType": "int",
                "accessModifier": "public",
                "getterAccessModifier": "public",
                "setterAccessModifier": "public"
            }]
        }))
        .unwrap();
        assert_eq!(dto.name, "Data1");
        assert_eq!(dto.properties.len(), 1);
        assert_eq!(dto.properties[0].property_type, "int");
    }

    #[test]
    fn accepts_property_data_alias_and_missing_fields() {
        let dto: ObjectDataDto = serde_json::from_value(json!({
            "name": "Data2",
            "propertyData": [{ "name": "StringValue", "propertyType": "string" }]
        }))
        .unwrap();
        assert_eq!(dto.data_type, "");
        assert_eq!(dto.properties[0].setter_access_modifier, "");
    }

    #[test]
    fn serializes_camel_case() {
        let dto = ObjectDataDto {
            name: "Data3".into(),
            data_type: "class".into(),
            access_modifier: "public".into(),
            properties: vec![PropertyDataDto::new("BooleanValue", "bool", "public", "public", "")],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["dataType"], "class");
        assert_eq!(value["properties"][0]["getterAccessModifier"], "public");
    }
}
