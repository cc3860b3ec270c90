//! # Shape Validation
//!
//! Validates a whole declaration. Shape-level fields are checked up front;
//! then every property is resolved on its own task and the results are
//! gathered in a concurrent accumulator. Validation is all-or-nothing: one
//! failing property rejects the shape, and the rejection lists every failing
//! property. Properties come back in submission order.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use forge_core::{
    name_key, validate_shape_name, ObjectDataDto, ShapeKind, ValidationError, Visibility,
};
use tokio::task::JoinSet;

use crate::resolver::{PropertyResolver, ResolutionChain};
use crate::spec::{ClassSpec, PropertySpec};

/// Validates shape declarations.
#[derive(Clone)]
pub struct ClassValidator {
    resolver: PropertyResolver,
}

impl ClassValidator {
    pub fn new(resolver: PropertyResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PropertyResolver {
        &self.resolver
    }

    /// Validate `dto` into its canonical in-memory form.
    pub async fn validate(&self, dto: &ObjectDataDto) -> Result<ClassSpec, ValidationError> {
        self.validate_in(dto.clone(), ResolutionChain::default()).await
    }

    pub(crate) async fn validate_in(
        &self,
        dto: ObjectDataDto,
        chain: ResolutionChain,
    ) -> Result<ClassSpec, ValidationError> {
        validate_shape_name(&dto.name)?;
        if dto.data_type.trim().is_empty() {
            return Err(ValidationError::EmptyField("dataType"));
        }
        let kind: ShapeKind = dto.data_type.parse()?;
        if dto.access_modifier.trim().is_empty() {
            return Err(ValidationError::EmptyField("accessModifier"));
        }
        let visibility: Visibility = dto.access_modifier.parse()?;

        let mut seen = HashSet::with_capacity(dto.properties.len());
        for prop in &dto.properties {
            if !seen.insert(name_key(&prop.name)) {
                return Err(ValidationError::DuplicateProperty(prop.name.clone()));
            }
        }

        let chain = chain.extend(&dto.name);
        let names: Vec<String> = dto.properties.iter().map(|p| p.name.clone()).collect();
        let accumulator: Arc<DashMap<usize, Result<PropertySpec, ValidationError>>> =
            Arc::new(DashMap::with_capacity(names.len()));

        let mut tasks = JoinSet::new();
        for (index, prop) in dto.properties.into_iter().enumerate() {
            let resolver = self.resolver.clone();
            let accumulator = accumulator.clone();
            let chain = chain.clone();
            tasks.spawn(async move {
                let resolved = resolver.resolve_in(prop, chain).await;
                accumulator.insert(index, resolved);
            });
        }
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!(shape = %dto.name, error = %e, "property resolution task failed");
            }
        }

        let mut properties = Vec::with_capacity(names.len());
        let mut failures = Vec::new();
        for (index, property) in names.into_iter().enumerate() {
            match accumulator.remove(&index) {
                Some((_, Ok(spec))) => properties.push(spec),
                Some((_, Err(e))) => failures.push(e),
                None => failures.push(ValidationError::Aborted { property }),
            }
        }
        if !failures.is_empty() {
            tracing::trace!(shape = %dto.name, failures = failures.len(), "declaration rejected");
            return Err(ValidationError::Properties {
                shape: dto.name,
                failures,
            });
        }

        Ok(ClassSpec {
            name: dto.name,
            visibility,
            kind,
            properties,
        })
    }
}
