//! Internal record shapes as loaded from the case-management database.
//!
//! These mirror rows plus the eager-loaded relations each broadcast needs.
//! They carry no behaviour beyond small lookups; mapping to external shapes
//! lives in the integrations crate.

mod appeal;
mod document;
mod event;
mod representation;
mod service_user;

pub use appeal::{Address, AppealRecord, AppealTimetable, RepresentationSummary};
pub use document::{DocumentRecord, DocumentVersionRecord};
pub use event::{EventEstimateRecord, EventKind, EventRecord};
pub use representation::{LpaReference, RejectionReason, RepresentationRecord};
pub use service_user::{ServiceUserRecord, ServiceUserType};
