//! Template tables for site visit notifications.
//!
//! A reschedule is looked up by its transition key, `<previous>To<New>` in
//! camelCase (e.g. `unaccompaniedToAccessRequired`). A recipient with no
//! template in the matching entry gets no email.

use serde::Serialize;

use crate::site_visit::{SiteVisitChange, SiteVisitType};

/// Who a template is addressed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recipient {
    Appellant,
    Lpa,
}

/// Templates to send, per recipient class.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appellant: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpa: Option<&'static str>,
}

impl TemplateSet {
    pub const EMPTY: TemplateSet = TemplateSet {
        appellant: None,
        lpa: None,
    };

    const fn appellant_only(appellant: &'static str) -> Self {
        Self {
            appellant: Some(appellant),
            lpa: None,
        }
    }

    const fn both(appellant: &'static str, lpa: &'static str) -> Self {
        Self {
            appellant: Some(appellant),
            lpa: Some(lpa),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.appellant.is_none() && self.lpa.is_none()
    }

    pub fn template_for(&self, recipient: Recipient) -> Option<&'static str> {
        match recipient {
            Recipient::Appellant => self.appellant,
            Recipient::Lpa => self.lpa,
        }
    }

    /// `(recipient, template)` pairs, appellant first.
    pub fn recipients(&self) -> impl Iterator<Item = (Recipient, &'static str)> + '_ {
        [Recipient::Appellant, Recipient::Lpa]
            .into_iter()
            .filter_map(|r| self.template_for(r).map(|t| (r, t)))
    }
}

const TRANSITIONS: &[(&str, TemplateSet)] = &[
    (
        "unaccompaniedToAccessRequired",
        TemplateSet::appellant_only("site-visit-change-unaccompanied-to-access-required-appellant"),
    ),
    (
        "accessRequiredToUnaccompanied",
        TemplateSet::appellant_only("site-visit-change-access-required-to-unaccompanied-appellant"),
    ),
    (
        "unaccompaniedToAccompanied",
        TemplateSet::both(
            "site-visit-change-unaccompanied-to-accompanied-appellant",
            "site-visit-change-unaccompanied-to-accompanied-lpa",
        ),
    ),
    (
        "accompaniedToUnaccompanied",
        TemplateSet::both(
            "site-visit-change-accompanied-to-unaccompanied-appellant",
            "site-visit-change-accompanied-to-unaccompanied-lpa",
        ),
    ),
    (
        "accessRequiredToAccompanied",
        TemplateSet::both(
            "site-visit-change-access-required-to-accompanied-appellant",
            "site-visit-change-access-required-to-accompanied-lpa",
        ),
    ),
    (
        "accompaniedToAccessRequired",
        TemplateSet::both(
            "site-visit-change-accompanied-to-access-required-appellant",
            "site-visit-change-accompanied-to-access-required-lpa",
        ),
    ),
];

const ACCESS_REQUIRED_DATE_CHANGE: TemplateSet =
    TemplateSet::appellant_only("site-visit-change-access-required-date-change-appellant");

const ACCOMPANIED_DATE_CHANGE: TemplateSet = TemplateSet::both(
    "site-visit-change-accompanied-date-change-appellant",
    "site-visit-change-accompanied-date-change-lpa",
);

const SCHEDULE_ACCESS_REQUIRED: TemplateSet =
    TemplateSet::appellant_only("site-visit-schedule-access-required-appellant");

const SCHEDULE_ACCOMPANIED: TemplateSet = TemplateSet::both(
    "site-visit-schedule-accompanied-appellant",
    "site-visit-schedule-accompanied-lpa",
);

const SCHEDULE_UNACCOMPANIED: TemplateSet =
    TemplateSet::appellant_only("site-visit-schedule-unaccompanied-appellant");

fn transition_key(previous: SiteVisitType, new: SiteVisitType) -> String {
    let new_key = new.key();
    let mut chars = new_key.chars();
    let upper_new: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{}To{}", previous.key(), upper_new)
}

fn lookup_transition(previous: SiteVisitType, new: SiteVisitType) -> TemplateSet {
    let key = transition_key(previous, new);
    TRANSITIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, set)| *set)
        .unwrap_or(TemplateSet::EMPTY)
}

/// Templates to send when an existing site visit is changed.
///
/// `previous` is `None` when the visit had no recorded type.
pub fn resolve_reschedule(
    previous: Option<&str>,
    new: &str,
    change: SiteVisitChange,
) -> TemplateSet {
    let Some(previous) = previous.map(SiteVisitType::parse) else {
        return TemplateSet::EMPTY;
    };
    let new = SiteVisitType::parse(new);

    let set = match change {
        SiteVisitChange::Unchanged => TemplateSet::EMPTY,
        // Date changes key off the type the parties were told about.
        SiteVisitChange::DateTime => match previous {
            SiteVisitType::AccessRequired => ACCESS_REQUIRED_DATE_CHANGE,
            SiteVisitType::Accompanied => ACCOMPANIED_DATE_CHANGE,
            _ => TemplateSet::EMPTY,
        },
        SiteVisitChange::VisitType | SiteVisitChange::All => {
            if previous == new {
                TemplateSet::EMPTY
            } else {
                lookup_transition(previous, new)
            }
        }
    };

    tracing::debug!(
        previous = previous.key(),
        new = new.key(),
        change = change.as_str(),
        appellant = set.appellant,
        lpa = set.lpa,
        "resolved site visit reschedule templates"
    );

    set
}

/// Templates to send when a site visit is first scheduled.
pub fn resolve_initial(visit_type: &str) -> TemplateSet {
    match SiteVisitType::parse(visit_type) {
        SiteVisitType::AccessRequired => SCHEDULE_ACCESS_REQUIRED,
        SiteVisitType::Accompanied => SCHEDULE_ACCOMPANIED,
        SiteVisitType::Unaccompanied => SCHEDULE_UNACCOMPANIED,
        SiteVisitType::Other => TemplateSet::EMPTY,
    }
}
