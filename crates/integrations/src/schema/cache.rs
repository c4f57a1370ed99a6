//! Injectable cache for the compiled schema registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::registry::SchemaRegistry;

/// Key the validator stores its registry under.
pub const REGISTRY_CACHE_KEY: &str = "integration-schemas";

/// Cache service holding compiled registries.
///
/// Lifecycle: populated at most meaningfully once per owner, read thereafter,
/// never invalidated. `set` may be called twice for the same key when two
/// first validations race; both values are identical.
pub trait SchemaCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Arc<SchemaRegistry>>;

    fn set(&self, key: &str, value: Arc<SchemaRegistry>);
}

/// Process-local cache backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct InMemorySchemaCache {
    entries: RwLock<HashMap<String, Arc<SchemaRegistry>>>,
}

impl InMemorySchemaCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaCache for InMemorySchemaCache {
    fn get(&self, key: &str) -> Option<Arc<SchemaRegistry>> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: Arc<SchemaRegistry>) {
        // A poisoned lock only costs a reload on the next validation.
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }
}
