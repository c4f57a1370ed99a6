use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use appeals_core::AppealId;
use appeals_core::records::ServiceUserType;
use appeals_events::{ChangeType, EntityKind};

/// What the caller remembered about a site visit or hearing before deleting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub id: i64,
    pub appeal_id: AppealId,
    pub visit_type: Option<String>,
    pub start: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEstimateSnapshot {
    pub id: i64,
    pub appeal_id: AppealId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUserSnapshot {
    pub id: i64,
    pub appeal_id: AppealId,
    pub service_user_type: ServiceUserType,
}

/// Partial data supplied with a delete, for when the row is already gone.
///
/// Only kinds whose delete messages can be rebuilt from a parent appeal have
/// a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StaleSnapshot {
    Event(EventSnapshot),
    EventEstimate(EventEstimateSnapshot),
    ServiceUser(ServiceUserSnapshot),
}

/// One broadcast invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub entity_id: i64,
    pub entity_kind: EntityKind,
    pub change_type: ChangeType,
    /// Documents only; `None` selects the latest version.
    pub version: Option<i32>,
    /// Deletes only.
    pub stale_snapshot: Option<StaleSnapshot>,
}

impl BroadcastRequest {
    pub fn new(entity_kind: EntityKind, entity_id: i64, change_type: ChangeType) -> Self {
        Self {
            entity_id,
            entity_kind,
            change_type,
            version: None,
            stale_snapshot: None,
        }
    }

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_snapshot(mut self, snapshot: StaleSnapshot) -> Self {
        self.stale_snapshot = Some(snapshot);
        self
    }

    pub fn is_delete(&self) -> bool {
        self.change_type.is_delete()
    }
}
