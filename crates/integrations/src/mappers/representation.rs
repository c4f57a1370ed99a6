//! Representation → representation message.
//!
//! Unknown status or type codes become `null` rather than failing the
//! mapping; the schema allows `null` for both.

use chrono::{DateTime, Utc};
use serde::Serialize;

use appeals_core::records::{RejectionReason, RepresentationRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealRepresentation {
    pub representation_id: i64,
    pub case_id: i64,
    pub case_reference: String,
    pub representation_status: Option<&'static str>,
    pub representation_type: Option<&'static str>,
    pub source: &'static str,
    pub original_representation: Option<String>,
    pub redacted: bool,
    pub redacted_representation: Option<String>,
    pub redacted_by: Option<String>,
    pub invalid_or_incomplete_details: Vec<String>,
    pub other_invalid_or_incomplete_details: Vec<String>,
    pub represented_id: Option<String>,
    pub representative_id: Option<String>,
    pub date_received: DateTime<Utc>,
    pub documents: Vec<String>,
}

pub fn map_status(status: &str) -> Option<&'static str> {
    match status {
        "awaiting_review" => Some("awaiting_review"),
        "valid" => Some("valid"),
        "invalid" => Some("invalid"),
        "incomplete" => Some("incomplete"),
        "published" => Some("published"),
        "withdrawn" => Some("withdrawn"),
        "draft" => Some("draft"),
        _ => None,
    }
}

pub fn map_type(representation_type: &str) -> Option<&'static str> {
    match representation_type {
        "comment" => Some("comment"),
        "lpa_statement" | "appellant_statement" | "rule_6_party_statement" => Some("statement"),
        "lpa_final_comment" | "appellant_final_comment" => Some("final_comment"),
        "lpa_proofs_evidence" | "appellant_proofs_evidence" => Some("proofs_evidence"),
        _ => None,
    }
}

pub fn source_of(representation: &RepresentationRecord) -> &'static str {
    if representation.lpa.is_some() {
        "lpa"
    } else {
        "citizen"
    }
}

/// `(names without free text, "<name>: <text>" for the free-text reason)`.
fn split_rejection_reasons(reasons: &[RejectionReason]) -> (Vec<String>, Vec<String>) {
    let plain = reasons
        .iter()
        .filter(|r| !r.has_text)
        .map(|r| r.name.clone())
        .collect();

    let other = reasons
        .iter()
        .find(|r| r.has_text)
        .map(|r| vec![format!("{}: {}", r.name, r.text.join(", "))])
        .unwrap_or_default();

    (plain, other)
}

pub fn map_representation(representation: &RepresentationRecord) -> AppealRepresentation {
    let (invalid, other_invalid) = split_rejection_reasons(&representation.rejection_reasons);

    AppealRepresentation {
        representation_id: representation.id.get(),
        case_id: representation.appeal_id.get(),
        case_reference: representation.case_reference.clone(),
        representation_status: map_status(&representation.status),
        representation_type: map_type(&representation.representation_type),
        source: source_of(representation),
        original_representation: representation.original_text.clone(),
        redacted: representation.redacted_text.is_some(),
        redacted_representation: representation.redacted_text.clone(),
        redacted_by: representation.redacted_by.clone(),
        invalid_or_incomplete_details: invalid,
        other_invalid_or_incomplete_details: other_invalid,
        represented_id: representation.represented_id.map(|id| id.to_string()),
        representative_id: representation.representative_id.map(|id| id.to_string()),
        date_received: representation.date_created,
        documents: representation.attachment_guids.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::fixtures;
    use appeals_core::records::LpaReference;

    #[test]
    fn source_follows_lpa_association() {
        let mut rep = fixtures::representation(1);
        rep.lpa = None;
        assert_eq!(map_representation(&rep).source, "citizen");

        rep.lpa = Some(LpaReference {
            lpa_code: "XXXX".to_string(),
        });
        assert_eq!(map_representation(&rep).source, "lpa");
    }

    #[test]
    fn unknown_status_and_type_become_null() {
        let mut rep = fixtures::representation(1);
        rep.status = "not-a-real-status".to_string();
        rep.representation_type = "mystery".to_string();

        let value = serde_json::to_value(map_representation(&rep)).unwrap();
        assert!(value["representationStatus"].is_null());
        assert!(value["representationType"].is_null());
    }

    #[test]
    fn rejection_reasons_split_into_two_buckets() {
        let mut rep = fixtures::representation(1);
        rep.rejection_reasons = vec![
            RejectionReason {
                name: "Includes personal data".to_string(),
                has_text: false,
                text: vec![],
            },
            RejectionReason {
                name: "Other".to_string(),
                has_text: true,
                text: vec!["Offensive language".to_string(), "Duplicate".to_string()],
            },
            RejectionReason {
                name: "Received after deadline".to_string(),
                has_text: false,
                text: vec![],
            },
        ];

        let dto = map_representation(&rep);
        assert_eq!(
            dto.invalid_or_incomplete_details,
            vec!["Includes personal data", "Received after deadline"]
        );
        assert_eq!(
            dto.other_invalid_or_incomplete_details,
            vec!["Other: Offensive language, Duplicate"]
        );
    }

    #[test]
    fn types_collapse_to_external_categories() {
        assert_eq!(map_type("lpa_statement"), Some("statement"));
        assert_eq!(map_type("appellant_final_comment"), Some("final_comment"));
        assert_eq!(map_type("LPA_STATEMENT"), None);
    }
}
