//! # Instances
//!
//! An [`Instance`] is one value per member slot of its [`LiveType`]. Reads
//! and writes go through the member's accessors: the accessor must exist and
//! its visibility must admit the caller's scope. A member without a setter
//! can only be given a value at construction.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use forge_core::{Accessor, Primitive, Visibility};
use serde_json::{Map, Number};
use uuid::Uuid;

use crate::error::AccessError;
use crate::spec::{PropertySpec, TypeReference};
use crate::synth::LiveType;

/// A member value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    DateTime(DateTime<Utc>),
    Guid(Uuid),
    Object(Box<Instance>),
}

impl Value {
    /// Default value of a member of built-in type `p`.
    pub fn default_for(p: Primitive) -> Self {
        match p {
            Primitive::Boolean => Self::Bool(false),
            Primitive::String | Primitive::Object => Self::Null,
            Primitive::Char => Self::Char('\0'),
            Primitive::DateTime => Self::DateTime(DateTime::<Utc>::default()),
            Primitive::Guid => Self::Guid(Uuid::nil()),
            p if p.is_fractional() => Self::Float(0.0),
            p if p.unsigned_max().is_some() => Self::UInt(0),
            _ => Self::Int(0),
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> String {
        match self {
            Self::Null => "null".into(),
            Self::Bool(_) => "bool".into(),
            Self::Int(i) => format!("integer {i}"),
            Self::UInt(u) => format!("integer {u}"),
            Self::Float(_) => "float".into(),
            Self::Char(_) => "char".into(),
            Self::Str(_) => "string".into(),
            Self::DateTime(_) => "DateTime".into(),
            Self::Guid(_) => "Guid".into(),
            Self::Object(instance) => format!("instance of {}", instance.live_type().name()),
        }
    }

    fn fits(&self, type_ref: &TypeReference) -> bool {
        match (type_ref, self) {
            (t, Self::Null) => t.is_nullable(),
            (TypeReference::Primitive(p), value) => fits_primitive(*p, value),
            (TypeReference::Shape(live), Self::Object(instance)) => {
                instance.live_type().name().eq_ignore_ascii_case(live.name())
            }
            (TypeReference::Shape(_), _) => false,
        }
    }

    fn to_json(&self, scope: Visibility) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(i) => Json::from(*i),
            Self::UInt(u) => Json::from(*u),
            Self::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Char(c) => Json::String(c.to_string()),
            Self::Str(s) => Json::String(s.clone()),
            Self::DateTime(dt) => Json::String(dt.to_rfc3339()),
            Self::Guid(id) => Json::String(id.to_string()),
            Self::Object(instance) => instance.to_json(scope),
        }
    }
}

fn fits_primitive(p: Primitive, value: &Value) -> bool {
    if let Some((min, max)) = p.signed_range() {
        return match value {
            Value::Int(i) => (min..=max).contains(i),
            Value::UInt(u) => i64::try_from(*u).is_ok_and(|i| i <= max),
            _ => false,
        };
    }
    if let Some(max) = p.unsigned_max() {
        return match value {
            Value::UInt(u) => *u <= max,
            Value::Int(i) => u64::try_from(*i).is_ok_and(|u| u <= max),
            _ => false,
        };
    }
    match p {
        _ if p.is_fractional() => matches!(value, Value::Float(_) | Value::Int(_) | Value::UInt(_)),
        Primitive::Boolean => matches!(value, Value::Bool(_)),
        Primitive::Char => matches!(value, Value::Char(_)),
        Primitive::String => matches!(value, Value::Str(_)),
        Primitive::DateTime => matches!(value, Value::DateTime(_)),
        Primitive::Guid => matches!(value, Value::Guid(_)),
        Primitive::Object => true,
        _ => false,
    }
}

/// A value of a synthesized shape.
#[derive(Debug, Clone)]
pub struct Instance {
    ty: Arc<LiveType>,
    slots: Vec<Value>,
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty) && self.slots == other.slots
    }
}

impl Instance {
    pub(crate) fn from_parts(ty: Arc<LiveType>, slots: Vec<Value>) -> Self {
        Self { ty, slots }
    }

    /// The type this instance was built from.
    pub fn live_type(&self) -> &Arc<LiveType> {
        &self.ty
    }

    /// Read `member` from `scope`.
    pub fn get(&self, member: &str, scope: Visibility) -> Result<&Value, AccessError> {
        let (slot, spec) = self.lookup(member)?;
        check_accessor(spec, Accessor::Getter, spec.getter, scope)?;
        Ok(&self.slots[slot])
    }

    /// Write `member` from `scope`. Fails for read-only members.
    pub fn set(&mut self, member: &str, value: Value, scope: Visibility) -> Result<(), AccessError> {
        let (slot, spec) = self.lookup(member)?;
        check_accessor(spec, Accessor::Setter, spec.setter, scope)?;
        check_type(spec, &value)?;
        self.slots[slot] = value;
        Ok(())
    }

    /// Construction-time write: ignores accessors, still type-checks.
    pub(crate) fn initialize(&mut self, member: &str, value: Value) -> Result<(), AccessError> {
        let (slot, spec) = self.lookup(member)?;
        check_type(spec, &value)?;
        self.slots[slot] = value;
        Ok(())
    }

    /// Render every member readable from `scope` as a JSON object.
    pub fn to_json(&self, scope: Visibility) -> serde_json::Value {
        let mut map = Map::new();
        for (spec, value) in self.ty.members().iter().zip(&self.slots) {
            if spec.getter.is_some_and(|getter| getter.admits(scope)) {
                map.insert(spec.name.clone(), value.to_json(scope));
            }
        }
        serde_json::Value::Object(map)
    }

    fn lookup(&self, member: &str) -> Result<(usize, &PropertySpec), AccessError> {
        self.ty.member(member).ok_or_else(|| AccessError::UnknownMember {
            shape: self.ty.name().to_string(),
            member: member.to_string(),
        })
    }
}

fn check_accessor(
    spec: &PropertySpec,
    accessor: Accessor,
    visibility: Option<Visibility>,
    scope: Visibility,
) -> Result<(), AccessError> {
    let Some(visibility) = visibility else {
        return Err(AccessError::MissingAccessor {
            member: spec.name.clone(),
            accessor,
        });
    };
    if !visibility.admits(scope) {
        return Err(AccessError::Inaccessible {
            member: spec.name.clone(),
            accessor,
            visibility,
            scope,
        });
    }
    Ok(())
}

fn check_type(spec: &PropertySpec, value: &Value) -> Result<(), AccessError> {
    if value.fits(&spec.type_ref) {
        Ok(())
    } else {
        Err(AccessError::TypeMismatch {
            member: spec.name.clone(),
            expected: spec.type_ref.display_name().to_string(),
            found: value.kind_name(),
        })
    }
}
