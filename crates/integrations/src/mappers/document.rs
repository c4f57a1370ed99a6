use chrono::{DateTime, Utc};
use serde::Serialize;

use appeals_core::records::{DocumentRecord, DocumentVersionRecord};

/// A document together with the one version being broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVersionView {
    pub document: DocumentRecord,
    pub version: DocumentVersionRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealDocument {
    pub document_id: String,
    pub case_id: i64,
    pub case_reference: String,
    pub version: i32,
    pub filename: String,
    pub original_filename: String,
    pub size: Option<i64>,
    pub mime: Option<String>,
    #[serde(rename = "documentURI")]
    pub document_uri: String,
    pub document_type: Option<String>,
    pub folder: Option<String>,
    pub redacted_status: Option<String>,
    pub virus_check_status: Option<String>,
    pub published_status: &'static str,
    pub is_deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_received: Option<DateTime<Utc>>,
}

/// `None` until the version's blob has been uploaded: there is nothing a
/// consumer could fetch yet.
pub fn map_document(view: &DocumentVersionView) -> Option<AppealDocument> {
    let DocumentVersionView { document, version } = view;
    let document_uri = version.document_uri.clone()?;

    Some(AppealDocument {
        document_id: document.guid.clone(),
        case_id: document.case_id.get(),
        case_reference: document.case_reference.clone(),
        version: version.version,
        filename: version.file_name.clone(),
        original_filename: version.original_filename.clone(),
        size: version.size,
        mime: version.mime.clone(),
        document_uri,
        document_type: version.document_type.clone(),
        folder: document.folder_path.clone(),
        redacted_status: version.redaction_status.clone(),
        virus_check_status: version.virus_check_status.clone(),
        published_status: if version.published {
            "published"
        } else {
            "not_published"
        },
        is_deleted: document.is_deleted,
        date_created: version.created_at,
        date_received: version.date_received,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::fixtures;

    #[test]
    fn maps_selected_version() {
        let view = fixtures::document_view(3, 2);
        let dto = map_document(&view).unwrap();
        assert_eq!(dto.version, 2);
        assert_eq!(dto.document_id, "guid-3");
        assert_eq!(dto.published_status, "not_published");

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["documentURI"], "https://blob.example/guid-3/v2");
    }

    #[test]
    fn nothing_to_send_without_an_uploaded_blob() {
        let mut view = fixtures::document_view(3, 1);
        view.version.document_uri = None;
        assert!(map_document(&view).is_none());
    }
}
