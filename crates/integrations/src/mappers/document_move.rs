use serde::{Deserialize, Serialize};

/// A document whose blob has to be copied to a new location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMove {
    pub document_guid: String,
    pub version: i32,
    pub case_reference: String,
    pub source_uri: String,
    pub destination_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentToMove {
    pub document_id: String,
    pub version: i32,
    pub case_reference: String,
    #[serde(rename = "originalURI")]
    pub original_uri: String,
    #[serde(rename = "importedURI")]
    pub imported_uri: String,
}

pub fn map_document_move(moved: &DocumentMove) -> DocumentToMove {
    DocumentToMove {
        document_id: moved.document_guid.clone(),
        version: moved.version,
        case_reference: moved.case_reference.clone(),
        original_uri: moved.source_uri.clone(),
        imported_uri: moved.destination_uri.clone(),
    }
}
