//! Named backend registry

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use super::traits::ModelClient;
use super::types::ModelError;
#[cfg(feature = "http-providers")]
use crate::config::BackendConfig;
#[cfg(feature = "http-providers")]
use super::factory::ProviderFactory;

/// Read-only map from backend name to its client.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it while
/// requests are being served, so lookups need no locking.
pub struct ModelRegistry {
    backends: HashMap<String, Arc<dyn ModelClient>>,
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// Create registry from config list using factory
    #[cfg(feature = "http-providers")]
    pub fn from_configs(configs: &[BackendConfig]) -> Result<Self, ModelError> {
        configs
            .iter()
            .fold(Self::builder(), |builder, config| {
                builder.register(config.id.clone(), ProviderFactory::create(config))
            })
            .build()
    }

    /// All registered backend names
    pub fn names(&self) -> BTreeSet<String> {
        self.backends.keys().cloned().collect()
    }

    /// Check if backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ModelClient>, ModelError> {
        self.backends
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::backend_not_found(name))
    }

    /// Requested names that are not registered, deduplicated, in first-seen order.
    pub fn unknown<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !self.has(name))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

/// Collects `(name, client)` pairs; `build` rejects duplicate names.
#[derive(Default)]
pub struct ModelRegistryBuilder {
    entries: Vec<(String, Arc<dyn ModelClient>)>,
}

impl ModelRegistryBuilder {
    pub fn register(mut self, name: impl Into<String>, client: Arc<dyn ModelClient>) -> Self {
        self.entries.push((name.into(), client));
        self
    }

    pub fn build(self) -> Result<ModelRegistry, ModelError> {
        let mut backends = HashMap::with_capacity(self.entries.len());
        for (name, client) in self.entries {
            if backends.contains_key(&name) {
                return Err(ModelError::duplicate_backend(name));
            }
            backends.insert(name, client);
        }
        Ok(ModelRegistry { backends })
    }
}
