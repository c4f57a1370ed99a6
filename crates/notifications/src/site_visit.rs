use core::str::FromStr;

use serde::{Deserialize, Serialize};

use appeals_core::DomainError;

/// Site visit types as recorded by caseworkers.
///
/// Anything not recognised parses to `Other`; no notification table has an
/// entry for it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteVisitType {
    Unaccompanied,
    Accompanied,
    AccessRequired,
    Other,
}

impl SiteVisitType {
    /// Lenient parse: ignores case, whitespace, `-` and `_`.
    pub fn parse(input: &str) -> Self {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "unaccompanied" => SiteVisitType::Unaccompanied,
            "accompanied" => SiteVisitType::Accompanied,
            "accessrequired" => SiteVisitType::AccessRequired,
            _ => SiteVisitType::Other,
        }
    }

    /// camelCase form used to build transition keys.
    pub(crate) fn key(self) -> &'static str {
        match self {
            SiteVisitType::Unaccompanied => "unaccompanied",
            SiteVisitType::Accompanied => "accompanied",
            SiteVisitType::AccessRequired => "accessRequired",
            SiteVisitType::Other => "other",
        }
    }
}

/// What changed when a site visit was edited.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteVisitChange {
    VisitType,
    DateTime,
    All,
    Unchanged,
}

impl SiteVisitChange {
    pub fn as_str(self) -> &'static str {
        match self {
            SiteVisitChange::VisitType => "visit-type",
            SiteVisitChange::DateTime => "date-time",
            SiteVisitChange::All => "all",
            SiteVisitChange::Unchanged => "unchanged",
        }
    }
}

impl FromStr for SiteVisitChange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visit-type" => Ok(SiteVisitChange::VisitType),
            "date-time" => Ok(SiteVisitChange::DateTime),
            "all" => Ok(SiteVisitChange::All),
            "unchanged" => Ok(SiteVisitChange::Unchanged),
            _ => Err(DomainError::unknown("site visit change", s)),
        }
    }
}
