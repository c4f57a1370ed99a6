use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::DomainError;
use crate::id::{AppealId, ServiceUserId};
use crate::records::Address;

/// Role a service user plays on an appeal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceUserType {
    Appellant,
    Agent,
    InterestedParty,
}

impl ServiceUserType {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceUserType::Appellant => "Appellant",
            ServiceUserType::Agent => "Agent",
            ServiceUserType::InterestedParty => "InterestedParty",
        }
    }
}

impl core::fmt::Display for ServiceUserType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceUserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "appellant" => Ok(ServiceUserType::Appellant),
            "agent" => Ok(ServiceUserType::Agent),
            "interestedparty" | "interested_party" | "interested-party" => {
                Ok(ServiceUserType::InterestedParty)
            }
            _ => Err(DomainError::unknown("service user type", s)),
        }
    }
}

/// A contact linked to an appeal, with its role and parent case reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUserRecord {
    pub id: ServiceUserId,
    pub appeal_id: AppealId,
    pub case_reference: String,
    pub service_user_type: ServiceUserType,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organisation: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
}

impl Entity for ServiceUserRecord {
    type Id = ServiceUserId;

    fn id(&self) -> ServiceUserId {
        self.id
    }
}
