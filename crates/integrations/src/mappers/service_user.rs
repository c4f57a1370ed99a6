use serde::Serialize;

use appeals_core::records::ServiceUserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUser {
    pub id: String,
    pub source_suid: String,
    pub source_system: String,
    pub service_user_type: String,
    pub case_reference: String,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organisation: Option<String>,
    pub email_address: Option<String>,
    pub telephone_number: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub postcode: Option<String>,
    pub address_country: Option<String>,
}

pub fn map_service_user(user: &ServiceUserRecord, source_system_id: &str) -> ServiceUser {
    let address = user.address.clone().unwrap_or_default();
    ServiceUser {
        id: user.id.to_string(),
        source_suid: user.id.to_string(),
        source_system: source_system_id.to_string(),
        service_user_type: user.service_user_type.to_string(),
        case_reference: user.case_reference.clone(),
        salutation: user.salutation.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        organisation: user.organisation.clone(),
        email_address: user.email.clone(),
        telephone_number: user.phone_number.clone(),
        address_line1: address.line1,
        address_line2: address.line2,
        address_town: address.town,
        address_county: address.county,
        postcode: address.postcode,
        address_country: address.country,
    }
}
