//! Appeal → case data message.
//!
//! Schema and topic are chosen separately from the case type code, and they
//! do not agree for every code: `H` and `ZA` use the householder schema but
//! are published on the S78 topic. Unknown codes take the S78 branch for both.

use chrono::{DateTime, Utc};
use serde::Serialize;

use appeals_core::records::{AppealRecord, RepresentationSummary};
use appeals_events::Topic;

use crate::schema::SchemaKey;

/// Fields shared by every appeal message (the householder shape).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealHasCase {
    pub case_id: i64,
    pub case_reference: String,
    pub case_type: String,
    pub case_procedure: Option<String>,
    pub case_status: String,
    pub lpa_code: String,
    pub application_reference: Option<String>,
    pub appellant_id: Option<i64>,
    pub agent_id: Option<i64>,
    pub case_officer_id: Option<String>,
    pub inspector_id: Option<String>,
    pub site_address_line1: Option<String>,
    pub site_address_line2: Option<String>,
    pub site_address_town: Option<String>,
    pub site_address_county: Option<String>,
    pub site_address_postcode: Option<String>,
    pub is_green_belt: Option<bool>,
    pub case_created_date: DateTime<Utc>,
    pub case_updated_date: DateTime<Utc>,
    pub case_valid_date: Option<DateTime<Utc>>,
    pub case_started_date: Option<DateTime<Utc>>,
    pub lpa_questionnaire_due_date: Option<DateTime<Utc>>,
}

/// Householder fields plus the S78-only timetable and representation summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealS78Case {
    #[serde(flatten)]
    pub common: AppealHasCase,
    pub statement_due_date: Option<DateTime<Utc>>,
    pub ip_comments_due_date: Option<DateTime<Utc>>,
    pub final_comments_due_date: Option<DateTime<Utc>>,
    pub planning_obligation_due_date: Option<DateTime<Utc>>,
    pub agricultural_holding: Option<bool>,
    pub planning_obligation: Option<bool>,
    pub interested_party_comment_count: u32,
    pub has_lpa_statement: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AppealCase {
    Has(AppealHasCase),
    S78(AppealS78Case),
}

impl AppealCase {
    pub fn schema(&self) -> SchemaKey {
        match self {
            AppealCase::Has(_) => SchemaKey::AppealHas,
            AppealCase::S78(_) => SchemaKey::AppealS78,
        }
    }
}

pub fn schema_for_case_type(case_type_code: &str) -> SchemaKey {
    match case_type_code {
        "D" | "ZP" | "H" | "ZA" => SchemaKey::AppealHas,
        _ => SchemaKey::AppealS78,
    }
}

pub fn topic_for_case_type(case_type_code: &str) -> Topic {
    match case_type_code {
        "D" | "ZP" => Topic::CaseData,
        _ => Topic::CaseDataS78,
    }
}

pub fn map_appeal(appeal: &AppealRecord) -> AppealCase {
    let common = map_common(appeal);
    match schema_for_case_type(&appeal.case_type_code) {
        SchemaKey::AppealHas => AppealCase::Has(common),
        _ => {
            let timetable = appeal.timetable.clone().unwrap_or_default();
            AppealCase::S78(AppealS78Case {
                common,
                statement_due_date: timetable.statement_due_date,
                ip_comments_due_date: timetable.ip_comments_due_date,
                final_comments_due_date: timetable.final_comments_due_date,
                planning_obligation_due_date: timetable.planning_obligation_due_date,
                agricultural_holding: appeal.agricultural_holding,
                planning_obligation: appeal.planning_obligation,
                interested_party_comment_count: count_accepted(&appeal.representations, "comment"),
                has_lpa_statement: count_accepted(&appeal.representations, "lpa_statement") > 0,
            })
        }
    }
}

fn map_common(appeal: &AppealRecord) -> AppealHasCase {
    let address = appeal.site_address.clone().unwrap_or_default();
    AppealHasCase {
        case_id: appeal.id.get(),
        case_reference: appeal.reference.clone(),
        case_type: appeal.case_type_code.clone(),
        case_procedure: appeal.procedure_type.as_deref().map(str::to_lowercase),
        case_status: appeal.status.clone(),
        lpa_code: appeal.lpa_code.clone(),
        application_reference: appeal.application_reference.clone(),
        appellant_id: appeal.appellant_id.map(|id| id.get()),
        agent_id: appeal.agent_id.map(|id| id.get()),
        case_officer_id: appeal.case_officer_id.clone(),
        inspector_id: appeal.inspector_id.clone(),
        site_address_line1: address.line1,
        site_address_line2: address.line2,
        site_address_town: address.town,
        site_address_county: address.county,
        site_address_postcode: address.postcode,
        is_green_belt: appeal.is_green_belt,
        case_created_date: appeal.created_at,
        case_updated_date: appeal.updated_at,
        case_valid_date: appeal.valid_at,
        case_started_date: appeal.started_at,
        lpa_questionnaire_due_date: appeal
            .timetable
            .as_ref()
            .and_then(|t| t.lpa_questionnaire_due_date),
    }
}

/// Representations of one type that passed review.
fn count_accepted(representations: &[RepresentationSummary], representation_type: &str) -> u32 {
    let count = representations
        .iter()
        .filter(|r| r.representation_type == representation_type)
        .filter(|r| matches!(r.status.as_str(), "valid" | "published"))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
