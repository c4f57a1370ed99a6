use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::{AppealId, EventEstimateId, EventId};
use crate::records::Address;

/// Which kind of scheduled event a row describes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    SiteVisit,
    Hearing,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::SiteVisit => "SiteVisit",
            EventKind::Hearing => "Hearing",
        }
    }
}

/// A scheduled site visit or hearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub appeal_id: AppealId,
    pub case_reference: String,
    pub kind: EventKind,
    /// Site visits only: `Accompanied`, `Unaccompanied`, `Access required`.
    pub visit_type: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub address: Option<Address>,
    pub published: bool,
    pub notified_at: Option<DateTime<Utc>>,
}

impl Entity for EventRecord {
    type Id = EventId;

    fn id(&self) -> EventId {
        self.id
    }
}

/// Inspector time estimate for an appeal's event, in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEstimateRecord {
    pub id: EventEstimateId,
    pub appeal_id: AppealId,
    pub case_reference: String,
    pub preparation_time: Option<f64>,
    pub sitting_time: Option<f64>,
    pub reporting_time: Option<f64>,
}

impl Entity for EventEstimateRecord {
    type Id = EventEstimateId;

    fn id(&self) -> EventEstimateId {
        self.id
    }
}
