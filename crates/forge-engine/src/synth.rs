//! # Type Synthesis
//!
//! Turns a validated [`ClassSpec`] into a [`LiveType`]: a tagged record type
//! with one member slot per property and a name-to-slot dispatch table. The
//! accessor layer on [`Instance`] enforces each member's visibility.
//!
//! Synthesis is fail-closed. Every new type is test-instantiated before it
//! is handed back, so a type that cannot be constructed never escapes.
//! Each call yields a fresh `Arc<LiveType>` with its own generation number.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use forge_core::{name_key, ShapeKind, Visibility};

use crate::error::SynthesisError;
use crate::instance::{Instance, Value};
use crate::spec::{ClassSpec, PropertySpec, TypeReference};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A synthesized, instantiable shape.
#[derive(Debug)]
pub struct LiveType {
    name: String,
    kind: ShapeKind,
    visibility: Visibility,
    members: Vec<PropertySpec>,
    index: HashMap<String, usize>,
    generation: u64,
}

impl LiveType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Members in declaration order; a member's position is its slot.
    pub fn members(&self) -> &[PropertySpec] {
        &self.members
    }

    /// Slot and declaration of the member named `name`.
    pub fn member(&self, name: &str) -> Option<(usize, &PropertySpec)> {
        let slot = *self.index.get(name)?;
        Some((slot, &self.members[slot]))
    }

    /// Monotonic across all syntheses in the process.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every shape this type reaches through its members, each listed once.
    pub fn dependencies(&self) -> Vec<Arc<LiveType>> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut pending: Vec<&Arc<LiveType>> = self.shape_members().collect();
        while let Some(live) = pending.pop() {
            if seen.insert(name_key(live.name())) {
                found.push(live.clone());
                pending.extend(live.shape_members());
            }
        }
        found
    }

    /// Whether `name` is among [`Self::dependencies`].
    pub fn depends_on(&self, name: &str) -> bool {
        let key = name_key(name);
        self.dependencies()
            .iter()
            .any(|live| name_key(live.name()) == key)
    }

    fn shape_members(&self) -> impl Iterator<Item = &Arc<LiveType>> {
        self.members.iter().filter_map(|member| match &member.type_ref {
            TypeReference::Shape(live) => Some(live),
            TypeReference::Primitive(_) => None,
        })
    }

    /// Construct an instance with every member at its default value.
    pub fn instantiate(self: &Arc<Self>) -> Result<Instance, SynthesisError> {
        if !self.kind.is_instantiable() {
            return Err(SynthesisError::NotInstantiable {
                shape: self.name.clone(),
                kind: self.kind,
            });
        }
        let slots = self
            .members
            .iter()
            .map(|member| default_value(&member.type_ref))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Instance::from_parts(self.clone(), slots))
    }

    /// Construct an instance and initialize the given members.
    ///
    /// Initialization bypasses accessor visibility and may set read-only
    /// members; values are still type-checked.
    pub fn construct<'a>(
        self: &Arc<Self>,
        init: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Instance, SynthesisError> {
        let mut instance = self.instantiate()?;
        for (member, value) in init {
            instance
                .initialize(member, value)
                .map_err(|source| SynthesisError::Initialization {
                    shape: self.name.clone(),
                    source,
                })?;
        }
        Ok(instance)
    }
}

fn default_value(type_ref: &TypeReference) -> Result<Value, SynthesisError> {
    match type_ref {
        TypeReference::Primitive(p) => Ok(Value::default_for(*p)),
        TypeReference::Shape(live) if live.kind() == ShapeKind::Struct => {
            Ok(Value::Object(Box::new(live.instantiate()?)))
        }
        TypeReference::Shape(_) => Ok(Value::Null),
    }
}

/// Build the live type for `spec`.
pub fn synthesize(spec: &ClassSpec) -> Result<Arc<LiveType>, SynthesisError> {
    let mut index = HashMap::with_capacity(spec.properties.len());
    for (slot, member) in spec.properties.iter().enumerate() {
        if member.name == spec.name {
            return Err(SynthesisError::MemberNamedAfterShape {
                shape: spec.name.clone(),
                member: member.name.clone(),
            });
        }
        if index.insert(member.name.clone(), slot).is_some() {
            return Err(SynthesisError::DuplicateMember {
                shape: spec.name.clone(),
                member: member.name.clone(),
            });
        }
    }

    let live = Arc::new(LiveType {
        name: spec.name.clone(),
        kind: spec.kind,
        visibility: spec.visibility,
        members: spec.properties.clone(),
        index,
        generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
    });

    live.instantiate()?;
    tracing::trace!(
        name = %live.name,
        kind = %live.kind,
        members = live.members.len(),
        generation = live.generation,
        "synthesized live type"
    );
    Ok(live)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::Primitive;

    fn prop(name: &str, type_ref: TypeReference, setter: Option<Visibility>) -> PropertySpec {
        PropertySpec {
            name: name.into(),
            type_ref,
            visibility: Visibility::Public,
            getter: Some(Visibility::Public),
            setter,
        }
    }

    fn shape(name: &str, kind: ShapeKind, properties: Vec<PropertySpec>) -> ClassSpec {
        ClassSpec {
            name: name.into(),
            visibility: Visibility::Public,
            kind,
            properties,
        }
    }

    #[test]
    fn data1_synthesizes_and_instantiates() {
        let spec = shape(
            "Data1",
            ShapeKind::Class,
            vec![prop(
                "IntegerValue",
                TypeReference::Primitive(Primitive::Int32),
                Some(Visibility::Public),
            )],
        );
        let live = synthesize(&spec).unwrap();
        assert_eq!(live.name(), "Data1");
        assert_eq!(live.members().len(), 1);
        let instance = live.instantiate().unwrap();
        assert_eq!(
            instance.get("IntegerValue", Visibility::Public).unwrap(),
            &Value::Int(0)
        );
    }

    #[test]
    fn member_named_after_shape_fails() {
        let spec = shape(
            "Data1",
            ShapeKind::Class,
            vec![prop("Data1", TypeReference::Primitive(Primitive::Int32), None)],
        );
        assert!(matches!(
            synthesize(&spec),
            Err(SynthesisError::MemberNamedAfterShape { .. })
        ));
    }

    #[test]
    fn duplicate_member_fails() {
        let p = prop("Value", TypeReference::Primitive(Primitive::Int32), None);
        let spec = shape("Dup", ShapeKind::Class, vec![p.clone(), p]);
        assert!(matches!(
            synthesize(&spec),
            Err(SynthesisError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn interface_is_never_handed_back() {
        let spec = shape("IShape", ShapeKind::Interface, vec![]);
        assert_eq!(
            synthesize(&spec).unwrap_err(),
            SynthesisError::NotInstantiable {
                shape: "IShape".into(),
                kind: ShapeKind::Interface,
            }
        );
    }

    #[test]
    fn struct_member_defaults_to_nested_instance() {
        let point = synthesize(&shape(
            "Point",
            ShapeKind::Struct,
            vec![
                prop("X", TypeReference::Primitive(Primitive::Double), Some(Visibility::Public)),
                prop("Y", TypeReference::Primitive(Primitive::Double), Some(Visibility::Public)),
            ],
        ))
        .unwrap();
        let customer = synthesize(&shape("Customer", ShapeKind::Class, vec![])).unwrap();
        let line = synthesize(&shape(
            "Line",
            ShapeKind::Class,
            vec![
                prop("Start", TypeReference::Shape(point), Some(Visibility::Public)),
                prop("Owner", TypeReference::Shape(customer), Some(Visibility::Public)),
                prop("Label", TypeReference::Primitive(Primitive::String), Some(Visibility::Public)),
            ],
        ))
        .unwrap();

        let instance = line.instantiate().unwrap();
        match instance.get("Start", Visibility::Public).unwrap() {
            Value::Object(nested) => {
                assert_eq!(nested.live_type().name(), "Point");
                assert_eq!(nested.get("X", Visibility::Public).unwrap(), &Value::Float(0.0));
            }
            other => panic!("expected nested struct, got {other:?}"),
        }
        assert_eq!(instance.get("Owner", Visibility::Public).unwrap(), &Value::Null);
        assert_eq!(instance.get("Label", Visibility::Public).unwrap(), &Value::Null);
    }

    #[test]
    fn dependencies_are_transitive_and_unique() {
        let point = synthesize(&shape(
            "Point",
            ShapeKind::Struct,
            vec![prop("X", TypeReference::Primitive(Primitive::Double), None)],
        ))
        .unwrap();
        let line = synthesize(&shape(
            "Line",
            ShapeKind::Class,
            vec![
                prop("Start", TypeReference::Shape(point.clone()), None),
                prop("End", TypeReference::Shape(point.clone()), None),
            ],
        ))
        .unwrap();
        let poly = synthesize(&shape(
            "Poly",
            ShapeKind::Class,
            vec![prop("Edge", TypeReference::Shape(line.clone()), None)],
        ))
        .unwrap();

        let mut names: Vec<String> = poly
            .dependencies()
            .iter()
            .map(|live| live.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["Line", "Point"]);
        assert!(poly.depends_on("POINT"));
        assert!(!line.depends_on("Poly"));
        assert!(point.dependencies().is_empty());
    }

    #[test]
    fn generations_increase() {
        let spec = shape("Data1", ShapeKind::Record, vec![]);
        let a = synthesize(&spec).unwrap();
        let b = synthesize(&spec).unwrap();
        assert!(b.generation() > a.generation());
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn construct_initializes_read_only_member() {
        let live = synthesize(&shape(
            "Data2",
            ShapeKind::Class,
            vec![prop("StringValue", TypeReference::Primitive(Primitive::String), None)],
        ))
        .unwrap();
        let instance = live
            .construct([("StringValue", Value::Str("fixed".into()))])
            .unwrap();
        assert_eq!(
            instance.get("StringValue", Visibility::Public).unwrap(),
            &Value::Str("fixed".into())
        );

        let err = live.construct([("StringValue", Value::Int(3))]).unwrap_err();
        assert!(matches!(err, SynthesisError::Initialization { .. }));
    }
}
