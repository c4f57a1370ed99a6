//! Shared fixtures for pipeline tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use appeals_core::records::{
    Address, AppealRecord, AppealTimetable, DocumentRecord, DocumentVersionRecord,
    EventEstimateRecord, EventKind, EventRecord, LpaReference, RepresentationRecord,
    ServiceUserRecord, ServiceUserType,
};
use appeals_core::{
    AppealId, DocumentId, EventEstimateId, EventId, RepresentationId, ServiceUserId,
};
use appeals_events::InMemoryPublisher;
use appeals_integrations::{
    BroadcastConfig, Broadcaster, Environment, InMemoryEntityLoader, SchemaValidator,
};

pub type TestBroadcaster = Broadcaster<Arc<InMemoryEntityLoader>, Arc<InMemoryPublisher>>;

pub struct Harness {
    pub loader: Arc<InMemoryEntityLoader>,
    pub publisher: Arc<InMemoryPublisher>,
    pub broadcaster: TestBroadcaster,
}

pub fn enabled_config() -> BroadcastConfig {
    BroadcastConfig::default()
        .with_broadcasts_enabled(true)
        .with_environment(Environment::Test)
}

pub fn harness_with(config: BroadcastConfig, validator: SchemaValidator) -> Harness {
    appeals_observability::tracing::init_for_tests();

    let loader = Arc::new(InMemoryEntityLoader::new());
    let publisher = Arc::new(InMemoryPublisher::new());
    let broadcaster = Broadcaster::new(loader.clone(), publisher.clone(), validator, config);
    Harness {
        loader,
        publisher,
        broadcaster,
    }
}

pub fn harness() -> Harness {
    harness_with(enabled_config(), SchemaValidator::bundled())
}

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 9, 30, 0).unwrap()
}

pub fn reference(appeal_id: i64) -> String {
    format!("{}", 6_000_000 + appeal_id)
}

pub fn address() -> Address {
    Address {
        line1: Some("1 High Street".to_string()),
        line2: None,
        town: Some("Bristol".to_string()),
        county: Some("Avon".to_string()),
        postcode: Some("BS1 1AA".to_string()),
        country: None,
    }
}

pub fn appeal(id: i64, case_type_code: &str) -> AppealRecord {
    AppealRecord {
        id: AppealId::new(id),
        reference: reference(id),
        case_type_code: case_type_code.to_string(),
        procedure_type: Some("Hearing".to_string()),
        status: "statements".to_string(),
        lpa_code: "Q9999".to_string(),
        application_reference: Some("23/00001/FUL".to_string()),
        appellant_id: Some(ServiceUserId::new(10)),
        agent_id: Some(ServiceUserId::new(11)),
        case_officer_id: None,
        inspector_id: Some("inspector-7".to_string()),
        site_address: Some(address()),
        timetable: Some(AppealTimetable {
            lpa_questionnaire_due_date: Some(at(3)),
            statement_due_date: Some(at(10)),
            ip_comments_due_date: None,
            final_comments_due_date: None,
            planning_obligation_due_date: None,
        }),
        representations: vec![],
        created_at: at(1),
        updated_at: at(2),
        valid_at: None,
        started_at: None,
        is_green_belt: None,
        agricultural_holding: None,
        planning_obligation: None,
    }
}

pub fn document(id: i64, appeal_id: i64, versions: i32) -> DocumentRecord {
    DocumentRecord {
        id: DocumentId::new(id),
        guid: format!("doc-{id}"),
        name: "decision-letter.pdf".to_string(),
        case_id: AppealId::new(appeal_id),
        case_reference: reference(appeal_id),
        folder_path: Some("appellant-case/decision".to_string()),
        is_deleted: false,
        latest_version: versions,
        versions: (1..=versions)
            .map(|v| DocumentVersionRecord {
                version: v,
                file_name: format!("decision-letter-{v}.pdf"),
                original_filename: "decision-letter.pdf".to_string(),
                mime: Some("application/pdf".to_string()),
                size: Some(1024 * i64::from(v)),
                document_uri: Some(format!("https://blob.example/doc-{id}/{v}")),
                document_type: Some("applicationDecisionLetter".to_string()),
                redaction_status: None,
                virus_check_status: Some("scanned".to_string()),
                published: v == versions,
                date_received: None,
                created_at: at(2),
            })
            .collect(),
    }
}

pub fn service_user(id: i64, appeal_id: i64, role: ServiceUserType) -> ServiceUserRecord {
    ServiceUserRecord {
        id: ServiceUserId::new(id),
        appeal_id: AppealId::new(appeal_id),
        case_reference: reference(appeal_id),
        service_user_type: role,
        salutation: None,
        first_name: Some("Alex".to_string()),
        last_name: Some("Morgan".to_string()),
        organisation: Some("Morgan Planning".to_string()),
        email: Some("alex@example.com".to_string()),
        phone_number: None,
        address: None,
    }
}

pub fn site_visit(id: i64, appeal_id: i64, visit_type: &str) -> EventRecord {
    EventRecord {
        id: EventId::new(id),
        appeal_id: AppealId::new(appeal_id),
        case_reference: reference(appeal_id),
        kind: EventKind::SiteVisit,
        visit_type: Some(visit_type.to_string()),
        start: Some(at(20)),
        end: Some(at(21)),
        address: Some(address()),
        published: true,
        notified_at: Some(at(5)),
    }
}

pub fn hearing(id: i64, appeal_id: i64) -> EventRecord {
    EventRecord {
        kind: EventKind::Hearing,
        visit_type: None,
        ..site_visit(id, appeal_id, "Accompanied")
    }
}

pub fn estimate(id: i64, appeal_id: i64) -> EventEstimateRecord {
    EventEstimateRecord {
        id: EventEstimateId::new(id),
        appeal_id: AppealId::new(appeal_id),
        case_reference: reference(appeal_id),
        preparation_time: Some(1.0),
        sitting_time: Some(2.5),
        reporting_time: None,
    }
}

pub fn representation(id: i64, appeal_id: i64, lpa: bool) -> RepresentationRecord {
    RepresentationRecord {
        id: RepresentationId::new(id),
        appeal_id: AppealId::new(appeal_id),
        case_reference: reference(appeal_id),
        representation_type: if lpa { "lpa_statement" } else { "comment" }.to_string(),
        status: "valid".to_string(),
        original_text: Some("Representation text".to_string()),
        redacted_text: None,
        redacted_by: None,
        lpa: lpa.then(|| LpaReference {
            lpa_code: "Q9999".to_string(),
        }),
        represented_id: Some(ServiceUserId::new(40)),
        representative_id: None,
        date_created: at(8),
        rejection_reasons: vec![],
        attachment_guids: vec!["doc-1".to_string()],
    }
}
