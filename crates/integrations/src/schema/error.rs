use thiserror::Error;

use super::key::SchemaSet;

/// Schema registry failure.
///
/// Every variant is a configuration problem, not a data problem: a payload
/// that merely fails validation is reported through `ValidationOutcome`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The requested schema name is not in the loaded registry.
    #[error("schema not found: {set}/{name}")]
    NotFound { name: String, set: SchemaSet },

    /// The schema documents could not be read or parsed.
    #[error("failed to load schemas: {0}")]
    Source(String),

    /// A schema document is not itself a valid JSON schema.
    #[error("failed to compile schema {set}/{name}: {message}")]
    Compile {
        name: String,
        set: SchemaSet,
        message: String,
    },
}

impl SchemaError {
    pub fn not_found(name: impl Into<String>, set: SchemaSet) -> Self {
        Self::NotFound {
            name: name.into(),
            set,
        }
    }

    /// Status class reported to HTTP callers: always an internal error.
    pub fn http_status(&self) -> u16 {
        500
    }
}
