//! # Property Resolution
//!
//! Validates one property declaration and resolves its type name. Resolution
//! tries, in order:
//!
//! 1. the built-in alias table,
//! 2. the loaded-type registry and the declaration store, searched
//!    concurrently. The first lookup to reach a verdict wins and the other is
//!    aborted. A registry hit counts only while the store still declares the
//!    shape and every shape it reaches. A store hit is validated and
//!    synthesized on the spot (which may recurse into further store lookups)
//!    and then published to the registry.
//!
//! A [`ResolutionChain`] carries the shapes whose declarations are being
//! resolved on the current path, so a shape cannot refer to itself, directly
//! or through its dependencies, whichever lookup supplies them.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use forge_core::{
    name_key, validate_identifier, Accessor, Primitive, PropertyDataDto, ValidationError,
    Visibility,
};
use forge_store::DeclarationStore;
use tokio::task::JoinSet;

use crate::registry::TypeRegistry;
use crate::spec::{PropertySpec, TypeReference};
use crate::synth::synthesize;
use crate::validator::ClassValidator;

pub(crate) type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Shapes under declaration on the current resolution path.
#[derive(Debug, Clone, Default)]
pub struct ResolutionChain {
    keys: Vec<String>,
}

impl ResolutionChain {
    /// This chain extended by `name`.
    pub fn extend(&self, name: &str) -> Self {
        let mut keys = self.keys.clone();
        keys.push(name_key(name));
        Self { keys }
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name_key(name);
        self.keys.iter().any(|k| *k == key)
    }
}

struct Inner {
    registry: TypeRegistry,
    store: DeclarationStore,
}

/// Resolves property declarations against the built-in types, the registry
/// and the store.
#[derive(Clone)]
pub struct PropertyResolver {
    inner: Arc<Inner>,
}

impl PropertyResolver {
    pub fn new(registry: TypeRegistry, store: DeclarationStore) -> Self {
        Self {
            inner: Arc::new(Inner { registry, store }),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.inner.registry
    }

    pub fn store(&self) -> &DeclarationStore {
        &self.inner.store
    }

    /// Validate and resolve a single property declaration.
    pub async fn resolve(&self, dto: &PropertyDataDto) -> Result<PropertySpec, ValidationError> {
        self.resolve_in(dto.clone(), ResolutionChain::default()).await
    }

    /// Resolve `dto` on behalf of the shapes in `chain`.
    pub(crate) fn resolve_in(
        &self,
        dto: PropertyDataDto,
        chain: ResolutionChain,
    ) -> BoxFuture<Result<PropertySpec, ValidationError>> {
        let resolver = self.clone();
        Box::pin(async move {
            let (visibility, getter, setter) = check_declaration(&dto)?;
            let name = dto.name;
            let type_name = dto.property_type.trim();
            if type_name.is_empty() {
                return Err(ValidationError::EmptyField("propertyType").in_property(name));
            }
            if chain.contains(type_name) {
                return Err(ValidationError::CyclicType {
                    property: name,
                    type_name: type_name.to_string(),
                });
            }
            let type_ref = match resolver.resolve_type(type_name, &chain).await {
                Resolution::Type(type_ref) => type_ref,
                Resolution::Cyclic => {
                    tracing::trace!(property = %name, type_name, "type reaches a shape under declaration");
                    return Err(ValidationError::CyclicType {
                        property: name,
                        type_name: type_name.to_string(),
                    });
                }
                Resolution::Missing => {
                    tracing::trace!(property = %name, type_name, "type did not resolve");
                    return Err(ValidationError::UnresolvedType {
                        property: name,
                        type_name: type_name.to_string(),
                    });
                }
            };
            tracing::trace!(property = %name, resolved = type_ref.display_name(), "property resolved");
            Ok(PropertySpec {
                name,
                type_ref,
                visibility,
                getter,
                setter,
            })
        })
    }

    async fn resolve_type(&self, type_name: &str, chain: &ResolutionChain) -> Resolution {
        if let Some(p) = Primitive::resolve(type_name) {
            return Resolution::Type(TypeReference::Primitive(p));
        }
        if validate_identifier(type_name).is_err() {
            return Resolution::Missing;
        }

        let mut lookups: JoinSet<Resolution> = JoinSet::new();
        let resolver = self.clone();
        let key = type_name.to_string();
        let lookup_chain = chain.clone();
        lookups.spawn(async move { resolver.lookup_registry(&key, &lookup_chain).await });
        let resolver = self.clone();
        let key = type_name.to_string();
        let lookup_chain = chain.clone();
        lookups.spawn(async move { resolver.load_from_store(&key, lookup_chain).await });

        let mut outcome = Resolution::Missing;
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok(Resolution::Missing) => {}
                Ok(decided) => {
                    outcome = decided;
                    break;
                }
                Err(e) => tracing::trace!(type_name, error = %e, "type lookup did not complete"),
            }
        }
        lookups.abort_all();
        outcome
    }

    /// Accept a loaded type only while the store still declares it and
    /// every shape it reaches.
    async fn lookup_registry(&self, name: &str, chain: &ResolutionChain) -> Resolution {
        let Some(live) = self.inner.registry.get(name) else {
            return Resolution::Missing;
        };
        let dependencies = live.dependencies();
        if dependencies.iter().any(|dep| chain.contains(dep.name())) {
            return Resolution::Cyclic;
        }
        for shape in std::iter::once(&live).chain(&dependencies) {
            match self.inner.store.exists(shape.name()).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::trace!(name, missing = shape.name(), "loaded type outlived its declaration");
                    self.inner.registry.evict(shape.name());
                    self.inner.registry.evict_dependents(shape.name());
                    return Resolution::Missing;
                }
                Err(e) => {
                    tracing::trace!(name, error = %e, "could not confirm loaded type");
                    return Resolution::Missing;
                }
            }
        }
        Resolution::Type(TypeReference::Shape(live))
    }

    /// Rebuild a dependency from its stored declaration.
    async fn load_from_store(&self, name: &str, chain: ResolutionChain) -> Resolution {
        let doc = match self.inner.store.get(name).await {
            Ok(Some(doc)) => doc,
            Ok(None) => return Resolution::Missing,
            Err(e) => {
                tracing::trace!(name, error = %e, "stored declaration unusable");
                return Resolution::Missing;
            }
        };
        let validator = ClassValidator::new(self.clone());
        let spec = match validator.validate_in(doc.to_dto(), chain).await {
            Ok(spec) => spec,
            Err(e) if e.is_cyclic() => {
                tracing::trace!(name, error = %e, "stored declaration reaches a shape under declaration");
                return Resolution::Cyclic;
            }
            Err(e) => {
                tracing::trace!(name, error = %e, "stored declaration no longer validates");
                return Resolution::Missing;
            }
        };
        match synthesize(&spec) {
            Ok(live) => {
                self.inner.registry.publish(live.clone());
                Resolution::Type(TypeReference::Shape(live))
            }
            Err(e) => {
                tracing::trace!(name, error = %e, "stored declaration not synthesizable");
                Resolution::Missing
            }
        }
    }
}

/// Outcome of resolving a type name.
enum Resolution {
    Type(TypeReference),
    /// The type reaches a shape on the current chain.
    Cyclic,
    Missing,
}

/// Name and visibility checks that need no type lookup.
fn check_declaration(
    dto: &PropertyDataDto,
) -> Result<(Visibility, Option<Visibility>, Option<Visibility>), ValidationError> {
    let name = dto.name.as_str();
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyField("property name"));
    }
    validate_identifier(name)?;

    if dto.access_modifier.trim().is_empty() {
        return Err(ValidationError::EmptyField("accessModifier").in_property(name));
    }
    let visibility: Visibility = dto
        .access_modifier
        .parse()
        .map_err(|e: ValidationError| e.in_property(name))?;
    let getter = Visibility::parse_accessor(&dto.getter_access_modifier)
        .map_err(|e| e.in_property(name))?;
    let setter = Visibility::parse_accessor(&dto.setter_access_modifier)
        .map_err(|e| e.in_property(name))?;

    if getter.is_none() && setter.is_none() {
        return Err(ValidationError::MissingAccessors {
            property: name.to_string(),
        });
    }
    for (accessor, declared) in [(Accessor::Getter, getter), (Accessor::Setter, setter)] {
        if let Some(accessor_visibility) = declared {
            if accessor_visibility > visibility {
                return Err(ValidationError::AccessorTooWide {
                    property: name.to_string(),
                    accessor,
                    accessor_visibility,
                    declared: visibility,
                });
            }
        }
    }
    Ok((visibility, getter, setter))
}
