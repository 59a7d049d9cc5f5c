//! Location domain model

use serde::{Deserialize, Serialize};

use super::Entity;

// == Location ==
/// A place where bookings happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Entity for Location {
    const KIND: &'static str = "location";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

// == Location Payload ==
/// Request body for creating or updating a location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl LocationPayload {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Location name cannot be empty".to_string());
        }
        if self.address.trim().is_empty() {
            return Some("Location address cannot be empty".to_string());
        }
        None
    }

    pub fn into_location(self, id: u64) -> Location {
        Location {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}
