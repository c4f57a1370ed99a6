use core::str::FromStr;

use serde::{Deserialize, Serialize};

use appeals_core::DomainError;

/// Change-type tag attached to every published message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Create,
    Update,
    Delete,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Create => "Create",
            ChangeType::Update => "Update",
            ChangeType::Delete => "Delete",
        }
    }

    pub fn is_delete(self) -> bool {
        matches!(self, ChangeType::Delete)
    }
}

impl core::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(ChangeType::Create),
            "update" => Ok(ChangeType::Update),
            "delete" => Ok(ChangeType::Delete),
            _ => Err(DomainError::unknown("change type", s)),
        }
    }
}

/// Kinds of entity whose changes are broadcast.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Appeal,
    Document,
    ServiceUser,
    SiteVisitEvent,
    HearingEvent,
    EventEstimate,
    Representation,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Appeal,
        EntityKind::Document,
        EntityKind::ServiceUser,
        EntityKind::SiteVisitEvent,
        EntityKind::HearingEvent,
        EntityKind::EventEstimate,
        EntityKind::Representation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Appeal => "appeal",
            EntityKind::Document => "document",
            EntityKind::ServiceUser => "service-user",
            EntityKind::SiteVisitEvent => "site-visit",
            EntityKind::HearingEvent => "hearing",
            EntityKind::EventEstimate => "event-estimate",
            EntityKind::Representation => "representation",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
