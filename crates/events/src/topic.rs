use serde::{Deserialize, Serialize};

/// Named destination channels on the external event bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "boCaseData")]
    CaseData,
    #[serde(rename = "boCaseDataS78")]
    CaseDataS78,
    #[serde(rename = "boDocument")]
    Document,
    #[serde(rename = "boServiceUser")]
    ServiceUser,
    #[serde(rename = "boEventData")]
    EventData,
    #[serde(rename = "boEventEstimate")]
    EventEstimate,
    #[serde(rename = "boRepresentation")]
    Representation,
    #[serde(rename = "boDocumentMove")]
    DocumentMove,
}

impl Topic {
    pub fn key(self) -> &'static str {
        match self {
            Topic::CaseData => "boCaseData",
            Topic::CaseDataS78 => "boCaseDataS78",
            Topic::Document => "boDocument",
            Topic::ServiceUser => "boServiceUser",
            Topic::EventData => "boEventData",
            Topic::EventEstimate => "boEventEstimate",
            Topic::Representation => "boRepresentation",
            Topic::DocumentMove => "boDocumentMove",
        }
    }
}

impl core::fmt::Display for Topic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}
