//! Pure mapping from internal records to external message shapes.
//!
//! No I/O and no failure on missing optional data: absent values are either
//! defaulted or serialised as `null`, per message type.

pub mod appeal;
pub mod document;
pub mod document_move;
pub mod event;
pub mod representation;
pub mod service_user;

pub use appeal::{
    AppealCase, AppealHasCase, AppealS78Case, map_appeal, schema_for_case_type, topic_for_case_type,
};
pub use document::{AppealDocument, DocumentVersionView, map_document};
pub use document_move::{DocumentMove, DocumentToMove, map_document_move};
pub use event::{AppealEvent, AppealEventEstimate, map_event, map_event_estimate};
pub use representation::{AppealRepresentation, map_representation};
pub use service_user::{ServiceUser, map_service_user};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use appeals_core::records::{
        Address, AppealRecord, AppealTimetable, DocumentRecord, DocumentVersionRecord,
        EventEstimateRecord, EventKind, EventRecord, RepresentationRecord, ServiceUserRecord,
        ServiceUserType,
    };
    use appeals_core::{
        AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
    };

    use super::DocumentVersionView;

    pub fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap()
    }

    pub fn reference(appeal_id: i64) -> String {
        (6_000_000 + appeal_id).to_string()
    }

    pub fn address() -> Address {
        Address {
            line1: Some("Temple Quay House".to_string()),
            line2: Some("2 The Square".to_string()),
            town: Some("Bristol".to_string()),
            county: None,
            postcode: Some("BS1 6PN".to_string()),
            country: Some("United Kingdom".to_string()),
        }
    }

    pub fn appeal(id: i64, case_type_code: &str) -> AppealRecord {
        AppealRecord {
            id: AppealId::new(id),
            reference: reference(id),
            case_type_code: case_type_code.to_string(),
            procedure_type: Some("Written".to_string()),
            status: "lpa_questionnaire".to_string(),
            lpa_code: "Q9999".to_string(),
            application_reference: Some("APP/123".to_string()),
            appellant_id: Some(ServiceUserId::new(100 + id)),
            agent_id: None,
            case_officer_id: Some("officer-1".to_string()),
            inspector_id: None,
            site_address: Some(address()),
            timetable: Some(AppealTimetable {
                lpa_questionnaire_due_date: Some(at(10)),
                statement_due_date: Some(at(20)),
                ip_comments_due_date: Some(at(20)),
                final_comments_due_date: Some(at(27)),
                planning_obligation_due_date: None,
            }),
            representations: vec![],
            created_at: at(1),
            updated_at: at(2),
            valid_at: Some(at(2)),
            started_at: Some(at(3)),
            is_green_belt: Some(false),
            agricultural_holding: None,
            planning_obligation: Some(true),
        }
    }

    pub fn document_version(document_id: i64, version: i32) -> DocumentVersionRecord {
        DocumentVersionRecord {
            version,
            file_name: format!("site-plan-v{version}.pdf"),
            original_filename: "site-plan.pdf".to_string(),
            mime: Some("application/pdf".to_string()),
            size: Some(20_480),
            document_uri: Some(format!("https://blob.example/guid-{document_id}/v{version}")),
            document_type: Some("planningApplicationForm".to_string()),
            redaction_status: Some("not_redacted".to_string()),
            virus_check_status: Some("scanned".to_string()),
            published: false,
            date_received: Some(at(4)),
            created_at: at(4),
        }
    }

    pub fn document(id: i64, versions: i32) -> DocumentRecord {
        DocumentRecord {
            id: DocumentId::new(id),
            guid: format!("guid-{id}"),
            name: "site-plan.pdf".to_string(),
            case_id: AppealId::new(1),
            case_reference: reference(1),
            folder_path: Some("appellant-case/plans".to_string()),
            is_deleted: false,
            latest_version: versions,
            versions: (1..=versions).map(|v| document_version(id, v)).collect(),
        }
    }

    pub fn document_view(id: i64, version: i32) -> DocumentVersionView {
        let document = document(id, version);
        let version = document_version(id, version);
        DocumentVersionView { document, version }
    }

    pub fn service_user(id: i64) -> ServiceUserRecord {
        ServiceUserRecord {
            id: ServiceUserId::new(id),
            appeal_id: AppealId::new(1),
            case_reference: reference(1),
            service_user_type: ServiceUserType::Appellant,
            salutation: Some("Mx".to_string()),
            first_name: Some("Sam".to_string()),
            last_name: Some("Taylor".to_string()),
            organisation: None,
            email: Some("sam@example.com".to_string()),
            phone_number: Some("01234 567890".to_string()),
            address: Some(address()),
        }
    }

    pub fn site_visit(id: i64, visit_type: &str) -> EventRecord {
        EventRecord {
            id: EventId::new(id),
            appeal_id: AppealId::new(1),
            case_reference: reference(1),
            kind: EventKind::SiteVisit,
            visit_type: Some(visit_type.to_string()),
            start: Some(at(15)),
            end: Some(at(15) + chrono::Duration::hours(2)),
            address: Some(address()),
            published: true,
            notified_at: Some(at(5)),
        }
    }

    pub fn event_estimate(id: i64) -> EventEstimateRecord {
        EventEstimateRecord {
            id: EventEstimateId::new(id),
            appeal_id: AppealId::new(1),
            case_reference: reference(1),
            preparation_time: Some(0.5),
            sitting_time: Some(1.0),
            reporting_time: Some(1.5),
        }
    }

    pub fn representation(id: i64) -> RepresentationRecord {
        RepresentationRecord {
            id: RepresentationId::new(id),
            appeal_id: AppealId::new(1),
            case_reference: reference(1),
            representation_type: "comment".to_string(),
            status: "awaiting_review".to_string(),
            original_text: Some("I object to this development.".to_string()),
            redacted_text: None,
            redacted_by: None,
            lpa: None,
            represented_id: Some(ServiceUserId::new(300 + id)),
            representative_id: None,
            date_created: at(6),
            rejection_reasons: vec![],
            attachment_guids: vec![],
        }
    }
}
