//! Schema registry, cache and validator.
//!
//! ```text
//! SchemaSource (bundled / directory)
//!   ↓ load once
//! SchemaRegistry (compiled validators, events + commands)
//!   ↓ stored in
//! SchemaCache (injected; key `integration-schemas`)
//!   ↓ read by
//! SchemaValidator::validate(name, payload, set)
//! ```

mod cache;
mod error;
mod key;
mod registry;
mod source;
mod validator;

pub use cache::{InMemorySchemaCache, REGISTRY_CACHE_KEY, SchemaCache};
pub use error::SchemaError;
pub use key::{CommandSchema, SchemaKey, SchemaSet};
pub use registry::SchemaRegistry;
pub use source::{BundledSchemas, DirectorySchemaSource, SchemaDocuments, SchemaSource};
pub use validator::{SchemaValidator, ValidationIssue, ValidationOutcome};
