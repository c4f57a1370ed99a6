use std::collections::HashMap;

use jsonschema::{Draft, Validator};
use serde_json::Value as JsonValue;

use super::error::SchemaError;
use super::key::SchemaSet;
use super::source::SchemaDocuments;

/// Compiled validators for every known schema name.
pub struct SchemaRegistry {
    events: HashMap<String, Validator>,
    commands: HashMap<String, Validator>,
}

impl SchemaRegistry {
    /// Compile every document; one bad document fails the whole registry.
    pub fn compile(documents: &SchemaDocuments) -> Result<Self, SchemaError> {
        Ok(Self {
            events: compile_set(documents, SchemaSet::Events)?,
            commands: compile_set(documents, SchemaSet::Commands)?,
        })
    }

    pub fn get(&self, name: &str, set: SchemaSet) -> Option<&Validator> {
        match set {
            SchemaSet::Events => self.events.get(name),
            SchemaSet::Commands => self.commands.get(name),
        }
    }

    pub fn names(&self, set: SchemaSet) -> Vec<&str> {
        let map = match set {
            SchemaSet::Events => &self.events,
            SchemaSet::Commands => &self.commands,
        };
        let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl core::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("events", &self.names(SchemaSet::Events))
            .field("commands", &self.names(SchemaSet::Commands))
            .finish()
    }
}

fn compile_set(
    documents: &SchemaDocuments,
    set: SchemaSet,
) -> Result<HashMap<String, Validator>, SchemaError> {
    documents
        .set(set)
        .iter()
        .map(|(name, schema)| Ok((name.clone(), compile_schema(name, set, schema)?)))
        .collect()
}

fn compile_schema(name: &str, set: SchemaSet, schema: &JsonValue) -> Result<Validator, SchemaError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| SchemaError::Compile {
            name: name.to_string(),
            set,
            message: err.to_string(),
        })
}
