//! Loaded-type registry.
//!
//! Maps shape names, case-insensitively, to the most recently published
//! live type. Publishing replaces the entry; instances holding the previous
//! `Arc<LiveType>` keep working against it.

use std::sync::Arc;

use dashmap::DashMap;
use forge_core::name_key;

use crate::synth::LiveType;

/// Cheaply cloneable handle; all clones share one map.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Arc<DashMap<String, Arc<LiveType>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the current type for `name`.
    pub fn get(&self, name: &str) -> Option<Arc<LiveType>> {
        self.types.get(&name_key(name)).map(|entry| entry.value().clone())
    }

    /// Make `live` the current type for its name, returning the one it
    /// supersedes.
    pub fn publish(&self, live: Arc<LiveType>) -> Option<Arc<LiveType>> {
        tracing::trace!(name = live.name(), generation = live.generation(), "publishing live type");
        self.types.insert(name_key(live.name()), live)
    }

    /// Drop the current type for `name`.
    pub fn evict(&self, name: &str) -> Option<Arc<LiveType>> {
        self.types.remove(&name_key(name)).map(|(_, live)| live)
    }

    /// Drop every type that reaches `name` through its members, returning
    /// the names evicted.
    ///
    /// Their members still point at the superseded or removed shape, so
    /// they must be rebuilt from the store on next use.
    pub fn evict_dependents(&self, name: &str) -> Vec<String> {
        let stale: Vec<String> = self
            .types
            .iter()
            .filter(|entry| entry.value().depends_on(name))
            .map(|entry| entry.key().clone())
            .collect();
        let mut evicted = Vec::with_capacity(stale.len());
        for key in stale {
            if let Some((_, live)) = self.types.remove(&key) {
                tracing::trace!(name = live.name(), dependency = name, "evicting dependent live type");
                evicted.push(live.name().to_string());
            }
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
