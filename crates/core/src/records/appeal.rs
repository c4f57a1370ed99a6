use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::{AppealId, ServiceUserId};

/// Postal address as stored against appeals, events and service users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

/// Due dates set when an appeal is started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppealTimetable {
    pub lpa_questionnaire_due_date: Option<DateTime<Utc>>,
    pub statement_due_date: Option<DateTime<Utc>>,
    pub ip_comments_due_date: Option<DateTime<Utc>>,
    pub final_comments_due_date: Option<DateTime<Utc>>,
    pub planning_obligation_due_date: Option<DateTime<Utc>>,
}

/// The slice of a representation an appeal broadcast needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationSummary {
    pub representation_type: String,
    pub status: String,
}

/// An appeal row with the relations the case-data mapper reads eagerly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppealRecord {
    pub id: AppealId,
    pub reference: String,
    /// Single or double letter case type code (`D`, `W`, `ZP`, ...).
    pub case_type_code: String,
    pub procedure_type: Option<String>,
    pub status: String,
    pub lpa_code: String,
    pub application_reference: Option<String>,
    pub appellant_id: Option<ServiceUserId>,
    pub agent_id: Option<ServiceUserId>,
    pub case_officer_id: Option<String>,
    pub inspector_id: Option<String>,
    pub site_address: Option<Address>,
    pub timetable: Option<AppealTimetable>,
    pub representations: Vec<RepresentationSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub valid_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub is_green_belt: Option<bool>,
    pub agricultural_holding: Option<bool>,
    pub planning_obligation: Option<bool>,
}

impl Entity for AppealRecord {
    type Id = AppealId;

    fn id(&self) -> AppealId {
        self.id
    }
}
