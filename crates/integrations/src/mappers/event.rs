use chrono::{DateTime, Utc};
use serde::Serialize;

use appeals_core::records::{EventEstimateRecord, EventKind, EventRecord};
use appeals_notifications::SiteVisitType;

/// Site visit or hearing message.
///
/// Optional fields are always serialised (as `null` when unknown); the
/// external schema requires them to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealEvent {
    pub event_id: String,
    pub case_reference: String,
    pub event_type: Option<&'static str>,
    pub event_published: bool,
    pub event_start_date_time: Option<DateTime<Utc>>,
    pub event_end_date_time: Option<DateTime<Utc>>,
    pub notification_of_site_visit: Option<DateTime<Utc>>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub address_postcode: Option<String>,
}

/// Inspector time estimate message; unknown durations are `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealEventEstimate {
    pub id: i64,
    pub case_reference: String,
    pub preparation_time: f64,
    pub sitting_time: f64,
    pub reporting_time: f64,
}

fn event_type(event: &EventRecord) -> Option<&'static str> {
    match event.kind {
        EventKind::Hearing => Some("hearing"),
        EventKind::SiteVisit => match SiteVisitType::parse(event.visit_type.as_deref()?) {
            SiteVisitType::Accompanied => Some("site_visit_accompanied"),
            SiteVisitType::Unaccompanied => Some("site_visit_unaccompanied"),
            SiteVisitType::AccessRequired => Some("site_visit_access_required"),
            SiteVisitType::Other => None,
        },
    }
}

pub fn map_event(event: &EventRecord) -> AppealEvent {
    let address = event.address.clone().unwrap_or_default();
    AppealEvent {
        event_id: format!("{}-{}", event.case_reference, event.id),
        case_reference: event.case_reference.clone(),
        event_type: event_type(event),
        event_published: event.published,
        event_start_date_time: event.start,
        event_end_date_time: event.end,
        notification_of_site_visit: event.notified_at,
        address_line1: address.line1,
        address_line2: address.line2,
        address_town: address.town,
        address_county: address.county,
        address_postcode: address.postcode,
    }
}

pub fn map_event_estimate(estimate: &EventEstimateRecord) -> AppealEventEstimate {
    AppealEventEstimate {
        id: estimate.id.get(),
        case_reference: estimate.case_reference.clone(),
        preparation_time: estimate.preparation_time.unwrap_or(0.0),
        sitting_time: estimate.sitting_time.unwrap_or(0.0),
        reporting_time: estimate.reporting_time.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::fixtures;

    #[test]
    fn maps_site_visit_type() {
        let mut event = fixtures::site_visit(4, "Access required");
        assert_eq!(map_event(&event).event_type, Some("site_visit_access_required"));

        event.visit_type = Some("drive-by".to_string());
        assert_eq!(map_event(&event).event_type, None);

        event.visit_type = None;
        assert_eq!(map_event(&event).event_type, None);
    }

    #[test]
    fn unknown_fields_are_present_as_null() {
        let mut event = fixtures::site_visit(4, "Accompanied");
        event.end = None;
        event.address = None;

        let value = serde_json::to_value(map_event(&event)).unwrap();
        let object = value.as_object().unwrap();
        assert!(object["eventEndDateTime"].is_null());
        assert!(object["addressLine1"].is_null());
        assert!(object.contains_key("notificationOfSiteVisit"));
    }

    #[test]
    fn estimate_defaults_missing_times_to_zero() {
        let mut estimate = fixtures::event_estimate(5);
        estimate.sitting_time = None;

        let dto = map_event_estimate(&estimate);
        assert_eq!(dto.sitting_time, 0.0);
        assert_eq!(dto.preparation_time, 0.5);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["sittingTime"].as_f64(), Some(0.0));
    }
}
