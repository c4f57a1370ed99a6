//! Payload validation against named JSON schemas.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::cache::{InMemorySchemaCache, REGISTRY_CACHE_KEY, SchemaCache};
use super::error::SchemaError;
use super::key::{CommandSchema, SchemaKey, SchemaSet};
use super::registry::SchemaRegistry;
use super::source::{BundledSchemas, SchemaSource};

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// JSON pointer to the offending value (`""` for the document root).
    pub path: String,
    pub message: String,
}

/// Result of validating a well-formed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<ValidationIssue>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(issues) => issues,
        }
    }
}

/// Validates payloads against the lazily loaded schema registry.
///
/// The registry is compiled on first use and kept in the injected cache. No
/// lock is held while loading: if two first validations race, both compile
/// the same documents and the second `set` overwrites the first with an
/// identical registry.
#[derive(Clone)]
pub struct SchemaValidator {
    source: Arc<dyn SchemaSource>,
    cache: Arc<dyn SchemaCache>,
}

impl SchemaValidator {
    pub fn new(source: Arc<dyn SchemaSource>, cache: Arc<dyn SchemaCache>) -> Self {
        Self { source, cache }
    }

    /// Bundled schemas with a private in-memory cache.
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledSchemas), Arc::new(InMemorySchemaCache::new()))
    }

    /// The compiled registry, loading and caching it on first use.
    pub fn registry(&self) -> Result<Arc<SchemaRegistry>, SchemaError> {
        if let Some(registry) = self.cache.get(REGISTRY_CACHE_KEY) {
            return Ok(registry);
        }

        let documents = self.source.load()?;
        let registry = Arc::new(SchemaRegistry::compile(&documents)?);
        self.cache.set(REGISTRY_CACHE_KEY, Arc::clone(&registry));
        tracing::debug!(
            events = documents.events.len(),
            commands = documents.commands.len(),
            "schema registry loaded"
        );
        Ok(registry)
    }

    /// Validate `payload` against the schema called `name` in `set`.
    ///
    /// A missing schema is an `Err`; a payload that violates its schema is
    /// `Ok(ValidationOutcome::Invalid(..))`.
    pub fn validate(
        &self,
        name: &str,
        payload: &JsonValue,
        set: SchemaSet,
    ) -> Result<ValidationOutcome, SchemaError> {
        let registry = self.registry()?;
        let validator = registry
            .get(name, set)
            .ok_or_else(|| SchemaError::not_found(name, set))?;

        let issues: Vec<ValidationIssue> = validator
            .iter_errors(payload)
            .map(|err| ValidationIssue {
                path: err.instance_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if issues.is_empty() {
            Ok(ValidationOutcome::Valid)
        } else {
            Ok(ValidationOutcome::Invalid(issues))
        }
    }

    pub fn validate_event(
        &self,
        key: SchemaKey,
        payload: &JsonValue,
    ) -> Result<ValidationOutcome, SchemaError> {
        self.validate(key.as_str(), payload, SchemaSet::Events)
    }

    pub fn validate_command(
        &self,
        schema: CommandSchema,
        payload: &JsonValue,
    ) -> Result<ValidationOutcome, SchemaError> {
        self.validate(schema.as_str(), payload, SchemaSet::Commands)
    }
}

impl core::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("cached", &self.cache.get(REGISTRY_CACHE_KEY).is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::schema::SchemaDocuments;

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl SchemaSource for CountingSource {
        fn load(&self) -> Result<SchemaDocuments, SchemaError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let mut docs = SchemaDocuments::default();
            docs.events.insert(
                "thing".to_string(),
                json!({
                    "type": "object",
                    "required": ["id", "name"],
                    "properties": {
                        "id": { "type": "integer" },
                        "name": { "type": "string" }
                    }
                }),
            );
            Ok(docs)
        }
    }

    fn counting_validator() -> (SchemaValidator, Arc<CountingSource>) {
        let source = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        let validator = SchemaValidator::new(source.clone(), Arc::new(InMemorySchemaCache::new()));
        (validator, source)
    }

    #[test]
    fn valid_payload_passes() {
        let (validator, _) = counting_validator();
        let outcome = validator
            .validate("thing", &json!({ "id": 1, "name": "a" }), SchemaSet::Events)
            .unwrap();
        assert!(outcome.is_valid());
        assert!(outcome.issues().is_empty());
    }

    #[test]
    fn invalid_payload_reports_path_and_message() {
        let (validator, _) = counting_validator();
        let outcome = validator
            .validate("thing", &json!({ "id": "one", "name": "a" }), SchemaSet::Events)
            .unwrap();

        let issues = outcome.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "/id");
        assert!(!issues[0].message.is_empty());
    }

    #[test]
    fn missing_schema_is_a_configuration_error() {
        let (validator, _) = counting_validator();
        let err = validator
            .validate("nope", &json!({}), SchemaSet::Events)
            .unwrap_err();
        assert_eq!(err, SchemaError::not_found("nope", SchemaSet::Events));
        assert_eq!(err.http_status(), 500);

        // Same name, other set.
        let err = validator
            .validate("thing", &json!({}), SchemaSet::Commands)
            .unwrap_err();
        assert!(matches!(err, SchemaError::NotFound { set: SchemaSet::Commands, .. }));
    }

    #[test]
    fn registry_is_loaded_once_and_reused() {
        let (validator, source) = counting_validator();
        for _ in 0..3 {
            validator
                .validate("thing", &json!({ "id": 1, "name": "a" }), SchemaSet::Events)
                .unwrap();
        }
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);

        // Clones share the cache.
        let clone = validator.clone();
        clone.registry().unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn racing_first_loads_agree() {
        let (validator, source) = counting_validator();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let validator = validator.clone();
                std::thread::spawn(move || {
                    validator
                        .validate("thing", &json!({ "id": 1 }), SchemaSet::Events)
                        .unwrap()
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
        assert!(!outcomes[0].is_valid());
        assert!((1..=4).contains(&source.loads.load(Ordering::SeqCst)));
    }

    #[test]
    fn bundled_registry_compiles() {
        let validator = SchemaValidator::bundled();
        let registry = validator.registry().unwrap();
        assert_eq!(registry.names(SchemaSet::Commands).len(), 3);
        assert_eq!(registry.names(SchemaSet::Events).len(), SchemaKey::ALL.len());
    }
}
