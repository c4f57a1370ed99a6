//! Inbound command payloads validated against the bundled command schemas.

use serde_json::json;

use appeals_integrations::schema::{CommandSchema, SchemaSet};
use appeals_integrations::{SchemaError, SchemaValidator};

fn appellant_submission() -> serde_json::Value {
    json!({
        "casedata": {
            "submissionId": "sub-001",
            "caseType": "D",
            "caseProcedure": "written",
            "lpaCode": "Q9999",
            "applicationReference": "23/00001/FUL",
            "applicationDate": "2025-01-15T00:00:00Z",
            "isGreenBelt": false,
            "siteAddress": {
                "addressLine1": "1 High Street",
                "addressTown": "Bristol",
                "postcode": "BS1 1AA"
            }
        },
        "users": [{
            "serviceUserType": "Appellant",
            "firstName": "Alex",
            "lastName": "Morgan",
            "emailAddress": "alex@example.com"
        }],
        "documents": [{
            "documentId": "doc-1",
            "filename": "application-form.pdf",
            "documentURI": "https://blob.example/uploads/doc-1",
            "documentType": "originalApplicationForm"
        }]
    })
}

#[test]
fn well_formed_submission_passes() {
    let validator = SchemaValidator::bundled();
    let outcome = validator
        .validate_command(CommandSchema::AppellantSubmission, &appellant_submission())
        .unwrap();
    assert!(outcome.is_valid(), "{:?}", outcome.issues());
}

#[test]
fn schema_violation_is_reported_with_path_and_message() {
    let validator = SchemaValidator::bundled();
    let mut payload = appellant_submission();
    payload["casedata"]["caseProcedure"] = json!("trial by combat");
    payload["users"][0]["serviceUserType"] = json!("Inspector");

    let outcome = validator
        .validate_command(CommandSchema::AppellantSubmission, &payload)
        .unwrap();

    let issues = outcome.issues();
    assert!(!outcome.is_valid());
    assert!(issues.iter().any(|i| i.path == "/casedata/caseProcedure"));
    assert!(issues.iter().any(|i| i.path == "/users/0/serviceUserType"));
    assert!(issues.iter().all(|i| !i.message.is_empty()));
}

#[test]
fn representation_needs_text_or_documents() {
    let validator = SchemaValidator::bundled();

    let with_text = json!({
        "caseReference": "6000001",
        "representationType": "comment",
        "representation": "I support this appeal."
    });
    assert!(
        validator
            .validate_command(CommandSchema::RepresentationSubmission, &with_text)
            .unwrap()
            .is_valid()
    );

    let empty = json!({
        "caseReference": "6000001",
        "representationType": "comment",
        "representation": null,
        "documents": []
    });
    assert!(
        !validator
            .validate_command(CommandSchema::RepresentationSubmission, &empty)
            .unwrap()
            .is_valid()
    );
}

#[test]
fn lpa_questionnaire_requires_core_answers() {
    let validator = SchemaValidator::bundled();
    let payload = json!({
        "casedata": { "caseReference": "6000001" },
        "documents": []
    });

    let outcome = validator
        .validate_command(CommandSchema::LpaQuestionnaire, &payload)
        .unwrap();
    assert!(!outcome.is_valid());
}

#[test]
fn unknown_schema_is_a_configuration_error() {
    let validator = SchemaValidator::bundled();

    let err = validator
        .validate("appellant-resubmission", &appellant_submission(), SchemaSet::Commands)
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound { .. }));
    assert_eq!(err.http_status(), 500);

    // Command names are not event names.
    let err = validator
        .validate("lpa-questionnaire", &json!({}), SchemaSet::Events)
        .unwrap_err();
    assert_eq!(err, SchemaError::not_found("lpa-questionnaire", SchemaSet::Events));
}
