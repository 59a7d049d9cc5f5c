//! Offering domain model
//!
//! A service offered for booking, with a fixed duration and price.

use serde::{Deserialize, Serialize};

use super::Entity;

// == Offering ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: u64,
    pub name: String,
    /// How long one appointment takes, in minutes
    pub duration_minutes: u32,
    pub price: f64,
}

impl Entity for Offering {
    const KIND: &'static str = "offering";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

// == Offering Payload ==
/// Request body for creating or updating an offering.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferingPayload {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl OfferingPayload {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Offering name cannot be empty".to_string());
        }
        if self.duration_minutes == 0 {
            return Some("Offering duration must be positive".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Offering price must be a non-negative number".to_string());
        }
        None
    }

    pub fn into_offering(self, id: u64) -> Offering {
        Offering {
            id,
            name: self.name,
            duration_minutes: self.duration_minutes,
            price: self.price,
        }
    }
}
