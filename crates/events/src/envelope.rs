use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::change::ChangeType;
use crate::topic::Topic;

/// Identifies this system to the receiving side when no override is configured.
pub const DEFAULT_SOURCE_SYSTEM_ID: &str = "back-office-appeals";

/// Metadata published alongside every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeMetadata {
    pub entity_type: String,
    pub source_system_id: String,
}

impl EnvelopeMetadata {
    pub fn new(entity_type: impl Into<String>, source_system_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            source_system_id: source_system_id.into(),
        }
    }
}

/// One publish call's worth of data.
///
/// Notes:
/// - Payloads are already schema-validated wire shapes; the envelope never
///   carries a partially valid batch.
/// - Exactly one payload per broadcast, except bulk document moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishEnvelope {
    topic: Topic,
    payloads: Vec<JsonValue>,
    change_type: ChangeType,
    metadata: EnvelopeMetadata,
}

impl PublishEnvelope {
    pub fn new(
        topic: Topic,
        payloads: Vec<JsonValue>,
        change_type: ChangeType,
        metadata: EnvelopeMetadata,
    ) -> Self {
        Self {
            topic,
            payloads,
            change_type,
            metadata,
        }
    }

    pub fn single(
        topic: Topic,
        payload: JsonValue,
        change_type: ChangeType,
        metadata: EnvelopeMetadata,
    ) -> Self {
        Self::new(topic, vec![payload], change_type, metadata)
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn payloads(&self) -> &[JsonValue] {
        &self.payloads
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    pub fn metadata(&self) -> &EnvelopeMetadata {
        &self.metadata
    }
}
