//! Notification template selection for site visits.
//!
//! Pure lookups only: which templates to send, and to whom, when a site visit
//! is first scheduled or later changed. Sending is someone else's job.

pub mod site_visit;
pub mod templates;

pub use site_visit::{SiteVisitChange, SiteVisitType};
pub use templates::{Recipient, TemplateSet, resolve_initial, resolve_reschedule};
