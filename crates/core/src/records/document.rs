use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::{AppealId, DocumentId};

/// One stored version of a case document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVersionRecord {
    pub version: i32,
    pub file_name: String,
    pub original_filename: String,
    pub mime: Option<String>,
    pub size: Option<i64>,
    pub document_uri: Option<String>,
    pub document_type: Option<String>,
    pub redaction_status: Option<String>,
    pub virus_check_status: Option<String>,
    pub published: bool,
    pub date_received: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A case document and every version recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub guid: String,
    pub name: String,
    pub case_id: AppealId,
    pub case_reference: String,
    pub folder_path: Option<String>,
    pub is_deleted: bool,
    pub latest_version: i32,
    pub versions: Vec<DocumentVersionRecord>,
}

impl DocumentRecord {
    /// The version record matching `version`, only when exactly one matches.
    pub fn version_exact(&self, version: i32) -> Option<&DocumentVersionRecord> {
        let mut matching = self.versions.iter().filter(|v| v.version == version);
        match (matching.next(), matching.next()) {
            (Some(found), None) => Some(found),
            _ => None,
        }
    }

    /// The version flagged as latest on the document row.
    pub fn latest(&self) -> Option<&DocumentVersionRecord> {
        self.version_exact(self.latest_version)
    }
}

impl Entity for DocumentRecord {
    type Id = DocumentId;

    fn id(&self) -> DocumentId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(n: i32) -> DocumentVersionRecord {
        DocumentVersionRecord {
            version: n,
            file_name: format!("plan-v{n}.pdf"),
            original_filename: "plan.pdf".to_string(),
            mime: Some("application/pdf".to_string()),
            size: Some(1024),
            document_uri: None,
            document_type: None,
            redaction_status: None,
            virus_check_status: None,
            published: false,
            date_received: None,
            created_at: Utc::now(),
        }
    }

    fn document(versions: Vec<DocumentVersionRecord>, latest: i32) -> DocumentRecord {
        DocumentRecord {
            id: DocumentId::new(1),
            guid: "doc-guid".to_string(),
            name: "plan.pdf".to_string(),
            case_id: AppealId::new(7),
            case_reference: "6000007".to_string(),
            folder_path: None,
            is_deleted: false,
            latest_version: latest,
            versions,
        }
    }

    #[test]
    fn exact_version_requires_a_single_match() {
        let doc = document(vec![version(1), version(2)], 2);
        assert_eq!(doc.version_exact(1).map(|v| v.version), Some(1));
        assert!(doc.version_exact(3).is_none());

        let duplicated = document(vec![version(1), version(1)], 1);
        assert!(duplicated.version_exact(1).is_none());
        assert!(duplicated.latest().is_none());
    }

    #[test]
    fn latest_follows_the_row_pointer() {
        let doc = document(vec![version(1), version(2)], 1);
        assert_eq!(doc.latest().map(|v| v.version), Some(1));
    }
}
