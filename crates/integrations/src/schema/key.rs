use serde::{Deserialize, Serialize};

/// Which half of the registry a schema name is looked up in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaSet {
    /// Outbound messages this system publishes.
    Events,
    /// Inbound payloads submitted by external services.
    Commands,
}

impl SchemaSet {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaSet::Events => "events",
            SchemaSet::Commands => "commands",
        }
    }
}

impl core::fmt::Display for SchemaSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound event schemas referenced by the broadcast pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaKey {
    AppealHas,
    AppealS78,
    AppealEvent,
    AppealEventEstimate,
    AppealRepresentation,
    AppealDocument,
    ServiceUser,
    DocumentToMove,
}

impl SchemaKey {
    pub const ALL: [SchemaKey; 8] = [
        SchemaKey::AppealHas,
        SchemaKey::AppealS78,
        SchemaKey::AppealEvent,
        SchemaKey::AppealEventEstimate,
        SchemaKey::AppealRepresentation,
        SchemaKey::AppealDocument,
        SchemaKey::ServiceUser,
        SchemaKey::DocumentToMove,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKey::AppealHas => "appeal-has",
            SchemaKey::AppealS78 => "appeal-s78",
            SchemaKey::AppealEvent => "appeal-event",
            SchemaKey::AppealEventEstimate => "appeal-event-estimate",
            SchemaKey::AppealRepresentation => "appeal-representation",
            SchemaKey::AppealDocument => "appeal-document",
            SchemaKey::ServiceUser => "service-user",
            SchemaKey::DocumentToMove => "document-to-move",
        }
    }
}

impl core::fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound command schemas for externally submitted payloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandSchema {
    /// An appellant's case submission.
    AppellantSubmission,
    /// A local planning authority's questionnaire.
    LpaQuestionnaire,
    /// A comment, statement or final comment submitted from outside.
    RepresentationSubmission,
}

impl CommandSchema {
    pub const ALL: [CommandSchema; 3] = [
        CommandSchema::AppellantSubmission,
        CommandSchema::LpaQuestionnaire,
        CommandSchema::RepresentationSubmission,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandSchema::AppellantSubmission => "appellant-submission",
            CommandSchema::LpaQuestionnaire => "lpa-questionnaire",
            CommandSchema::RepresentationSubmission => "representation-submission",
        }
    }
}

impl core::fmt::Display for CommandSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
