//! Where schema documents come from.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use super::error::SchemaError;
use super::key::SchemaSet;

const SCHEMA_SUFFIX: &str = ".schema.json";

/// Raw (uncompiled) schema documents, keyed by name within each set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDocuments {
    pub events: BTreeMap<String, JsonValue>,
    pub commands: BTreeMap<String, JsonValue>,
}

impl SchemaDocuments {
    pub fn set(&self, set: SchemaSet) -> &BTreeMap<String, JsonValue> {
        match set {
            SchemaSet::Events => &self.events,
            SchemaSet::Commands => &self.commands,
        }
    }

    fn set_mut(&mut self, set: SchemaSet) -> &mut BTreeMap<String, JsonValue> {
        match set {
            SchemaSet::Events => &mut self.events,
            SchemaSet::Commands => &mut self.commands,
        }
    }
}

/// Produces the full set of schema documents.
///
/// Implementations must be side-effect free and return identical documents on
/// every call: the validator may call `load` more than once if two first
/// validations race.
pub trait SchemaSource: Send + Sync {
    fn load(&self) -> Result<SchemaDocuments, SchemaError>;
}

/// Schema documents compiled into the binary.
#[derive(Debug, Copy, Clone, Default)]
pub struct BundledSchemas;

const BUNDLED_EVENTS: &[(&str, &str)] = &[
    ("appeal-has", include_str!("../../schemas/events/appeal-has.schema.json")),
    ("appeal-s78", include_str!("../../schemas/events/appeal-s78.schema.json")),
    ("appeal-event", include_str!("../../schemas/events/appeal-event.schema.json")),
    (
        "appeal-event-estimate",
        include_str!("../../schemas/events/appeal-event-estimate.schema.json"),
    ),
    (
        "appeal-representation",
        include_str!("../../schemas/events/appeal-representation.schema.json"),
    ),
    ("appeal-document", include_str!("../../schemas/events/appeal-document.schema.json")),
    ("service-user", include_str!("../../schemas/events/service-user.schema.json")),
    ("document-to-move", include_str!("../../schemas/events/document-to-move.schema.json")),
];

const BUNDLED_COMMANDS: &[(&str, &str)] = &[
    (
        "appellant-submission",
        include_str!("../../schemas/commands/appellant-submission.schema.json"),
    ),
    ("lpa-questionnaire", include_str!("../../schemas/commands/lpa-questionnaire.schema.json")),
    (
        "representation-submission",
        include_str!("../../schemas/commands/representation-submission.schema.json"),
    ),
];

impl SchemaSource for BundledSchemas {
    fn load(&self) -> Result<SchemaDocuments, SchemaError> {
        let mut docs = SchemaDocuments::default();
        for (set, entries) in [
            (SchemaSet::Events, BUNDLED_EVENTS),
            (SchemaSet::Commands, BUNDLED_COMMANDS),
        ] {
            for (name, text) in entries {
                let value = serde_json::from_str(text)
                    .map_err(|e| SchemaError::Source(format!("{set}/{name}: {e}")))?;
                docs.set_mut(set).insert((*name).to_string(), value);
            }
        }
        Ok(docs)
    }
}

/// Schema documents read from `<root>/events/*.schema.json` and
/// `<root>/commands/*.schema.json`.
#[derive(Debug, Clone)]
pub struct DirectorySchemaSource {
    root: PathBuf,
}

impl DirectorySchemaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_set(&self, set: SchemaSet, into: &mut BTreeMap<String, JsonValue>) -> Result<(), SchemaError> {
        let dir = self.root.join(set.as_str());
        let entries = fs::read_dir(&dir)
            .map_err(|e| SchemaError::Source(format!("{}: {e}", dir.display())))?;

        for entry in entries {
            let path = entry
                .map_err(|e| SchemaError::Source(format!("{}: {e}", dir.display())))?
                .path();
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(SCHEMA_SUFFIX))
            else {
                continue;
            };

            let text = fs::read_to_string(&path)
                .map_err(|e| SchemaError::Source(format!("{}: {e}", path.display())))?;
            let value = serde_json::from_str(&text)
                .map_err(|e| SchemaError::Source(format!("{}: {e}", path.display())))?;
            into.insert(name.to_string(), value);
        }
        Ok(())
    }
}

impl SchemaSource for DirectorySchemaSource {
    fn load(&self) -> Result<SchemaDocuments, SchemaError> {
        let mut docs = SchemaDocuments::default();
        self.load_set(SchemaSet::Events, &mut docs.events)?;
        self.load_set(SchemaSet::Commands, &mut docs.commands)?;
        tracing::debug!(
            root = %self.root.display(),
            events = docs.events.len(),
            commands = docs.commands.len(),
            "loaded schema documents from directory"
        );
        Ok(docs)
    }
}
