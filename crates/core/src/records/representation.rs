use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::{AppealId, RepresentationId, ServiceUserId};

/// LPA association on a representation submitted by the planning authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpaReference {
    pub lpa_code: String,
}

/// A reason recorded when a representation is rejected or marked incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReason {
    pub name: String,
    /// Whether the caseworker may (and did) supply free text for this reason.
    pub has_text: bool,
    pub text: Vec<String>,
}

/// A comment, statement or final comment and its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationRecord {
    pub id: RepresentationId,
    pub appeal_id: AppealId,
    pub case_reference: String,
    /// Internal type code, e.g. `comment`, `lpa_statement`, `appellant_final_comment`.
    pub representation_type: String,
    /// Internal review status, e.g. `awaiting_review`, `valid`, `published`.
    pub status: String,
    pub original_text: Option<String>,
    pub redacted_text: Option<String>,
    pub redacted_by: Option<String>,
    pub lpa: Option<LpaReference>,
    pub represented_id: Option<ServiceUserId>,
    pub representative_id: Option<ServiceUserId>,
    pub date_created: DateTime<Utc>,
    pub rejection_reasons: Vec<RejectionReason>,
    pub attachment_guids: Vec<String>,
}

impl Entity for RepresentationRecord {
    type Id = RepresentationId;

    fn id(&self) -> RepresentationId {
        self.id
    }
}
