//! # Object Handler
//!
//! The CRUD contract the HTTP layer consumes. Every write runs
//! validate, synthesize, existence check, persist, publish, in that order:
//! nothing is stored that cannot be synthesized, and nothing is published
//! that was not stored.
//!
//! Replacing or removing a shape also evicts every loaded type built on it,
//! so later declarations resolve those dependents from the store again.
//!
//! Outcomes are logged here. Rejected declarations log at info, existence
//! conflicts at warn, store failures at error.

use forge_core::{ObjectDataDto, Visibility};
use forge_store::{DeclarationStore, StoreConfig, StoreError};

use crate::error::HandlerError;
use crate::instance::Instance;
use crate::registry::TypeRegistry;
use crate::resolver::PropertyResolver;
use crate::spec::ClassSpec;
use crate::synth::synthesize;
use crate::validator::ClassValidator;

/// Façade over validation, synthesis, storage and the type registry.
#[derive(Clone)]
pub struct ObjectHandler {
    store: DeclarationStore,
    registry: TypeRegistry,
    validator: ClassValidator,
}

impl std::fmt::Debug for ObjectHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectHandler")
            .field("store", &self.store)
            .field("loaded_types", &self.registry.len())
            .finish()
    }
}

impl ObjectHandler {
    pub fn new(store: DeclarationStore) -> Self {
        let registry = TypeRegistry::new();
        let validator = ClassValidator::new(PropertyResolver::new(registry.clone(), store.clone()));
        Self {
            store,
            registry,
            validator,
        }
    }

    /// Open the store described by `config` and wrap it.
    pub async fn open(config: StoreConfig) -> Result<Self, HandlerError> {
        let store = DeclarationStore::open(config).await.map_err(|e| {
            tracing::error!(error = %e, "failed to open declaration store");
            HandlerError::from(e)
        })?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &DeclarationStore {
        &self.store
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Declare a new shape. Returns the normalized declaration.
    pub async fn add(&self, dto: &ObjectDataDto) -> Result<ObjectDataDto, HandlerError> {
        let spec = self.prepare(dto).await?;
        let live = synthesize(&spec).map_err(|e| {
            tracing::info!(name = %spec.name, error = %e, "declaration cannot be synthesized");
            e
        })?;

        if self.store.exists(&spec.name).await.map_err(|e| log_store("add", &spec.name, e))? {
            tracing::warn!(name = %spec.name, "declaration already exists");
            return Err(HandlerError::AlreadyExists(spec.name));
        }

        let doc = spec.to_document();
        self.store
            .add(&doc)
            .await
            .map_err(|e| log_store("add", &spec.name, e))?;
        self.registry.publish(live);
        tracing::info!(name = %spec.name, properties = spec.properties.len(), "declaration added");
        Ok(doc.to_dto())
    }

    /// Replace an existing shape wholesale. Returns the normalized
    /// declaration.
    pub async fn update(&self, dto: &ObjectDataDto) -> Result<ObjectDataDto, HandlerError> {
        let spec = self.prepare(dto).await?;
        let live = synthesize(&spec).map_err(|e| {
            tracing::info!(name = %spec.name, error = %e, "declaration cannot be synthesized");
            e
        })?;

        if !self.store.exists(&spec.name).await.map_err(|e| log_store("update", &spec.name, e))? {
            tracing::warn!(name = %spec.name, "declaration to update does not exist");
            return Err(HandlerError::NotFound(spec.name));
        }

        let doc = spec.to_document();
        self.store
            .update(&doc)
            .await
            .map_err(|e| log_store("update", &spec.name, e))?;
        self.registry.publish(live);
        self.evict_dependents(&spec.name);
        tracing::info!(name = %spec.name, properties = spec.properties.len(), "declaration updated");
        Ok(doc.to_dto())
    }

    /// The stored declaration named `name`, matched case-insensitively.
    pub async fn get(&self, name: &str) -> Result<Option<ObjectDataDto>, HandlerError> {
        let doc = self.store.get(name).await.map_err(|e| log_store("get", name, e))?;
        Ok(doc.map(|doc| doc.to_dto()))
    }

    /// Every readable stored declaration, sorted by name.
    pub async fn get_all(&self) -> Result<Vec<ObjectDataDto>, HandlerError> {
        let docs = self
            .store
            .get_all()
            .await
            .map_err(|e| log_store("get_all", "*", e))?;
        Ok(docs.iter().map(|doc| doc.to_dto()).collect())
    }

    /// The readable listing stored for `name`.
    pub async fn listing(&self, name: &str) -> Result<Option<String>, HandlerError> {
        self.store
            .read_listing(name)
            .await
            .map_err(|e| log_store("listing", name, e))
    }

    /// Delete the declaration and evict its live type.
    pub async fn remove(&self, name: &str) -> Result<(), HandlerError> {
        self.store
            .remove(name)
            .await
            .map_err(|e| log_store("remove", name, e))?;
        self.registry.evict(name);
        self.evict_dependents(name);
        tracing::info!(name, "declaration removed");
        Ok(())
    }

    /// Rebuild the stored shape and construct a fresh instance of it.
    ///
    /// The requested shape is always re-synthesized from its stored
    /// declaration; only its dependencies may come from the registry.
    /// Returns `None` when the shape is unknown or cannot be realized.
    pub async fn try_instantiate(&self, name: &str) -> Option<Instance> {
        let doc = match self.store.get(name).await {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                tracing::info!(name, "no declaration to instantiate");
                return None;
            }
            Err(e) => {
                log_store("try_instantiate", name, e);
                return None;
            }
        };
        let spec = match self.validator.validate(&doc.to_dto()).await {
            Ok(spec) => spec,
            Err(e) => {
                tracing::warn!(name, error = %e, "stored declaration no longer validates");
                return None;
            }
        };
        match synthesize(&spec).and_then(|live| live.instantiate()) {
            Ok(instance) => Some(instance),
            Err(e) => {
                tracing::warn!(name, error = %e, "stored declaration cannot be instantiated");
                None
            }
        }
    }

    /// [`Self::try_instantiate`] rendered as the publicly readable members.
    pub async fn instance_json(&self, name: &str) -> Option<serde_json::Value> {
        self.try_instantiate(name)
            .await
            .map(|instance| instance.to_json(Visibility::Public))
    }

    fn evict_dependents(&self, name: &str) {
        let evicted = self.registry.evict_dependents(name);
        if !evicted.is_empty() {
            tracing::debug!(name, ?evicted, "evicted live types built on the old declaration");
        }
    }

    async fn prepare(&self, dto: &ObjectDataDto) -> Result<ClassSpec, HandlerError> {
        self.validator.validate(dto).await.map_err(|e| {
            tracing::info!(name = %dto.name, error = %e, "declaration rejected");
            HandlerError::Validation(e)
        })
    }
}

fn log_store(operation: &'static str, name: &str, err: StoreError) -> HandlerError {
    match &err {
        StoreError::AlreadyExists(_) | StoreError::NotFound(_) => {
            tracing::warn!(operation, name, error = %err, "declaration store conflict");
        }
        StoreError::InvalidName(_) => {
            tracing::info!(operation, name, error = %err, "invalid declaration name");
        }
        _ => {
            tracing::error!(operation, name, error = %err, "declaration store failure");
        }
    }
    HandlerError::from(err)
}
