//! Staff domain model
//!
//! A staff member offers services at a location during fixed working hours.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Entity;

// == Staff ==
/// A bookable staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: u64,
    pub name: String,
    /// Days of the week this member works, e.g. `["MONDAY", "FRIDAY"]`
    pub workdays: Vec<String>,
    /// Daily shift start
    pub starts_at: NaiveTime,
    /// Daily shift end
    pub ends_at: NaiveTime,
}

impl Entity for Staff {
    const KIND: &'static str = "staff";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

// == Staff Payload ==
/// Request body for creating or updating a staff member.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffPayload {
    pub name: String,
    #[serde(default)]
    pub workdays: Vec<String>,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
}

impl StaffPayload {
    /// Validates the payload, returning an error message if it is unusable.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Staff name cannot be empty".to_string());
        }
        if self.starts_at >= self.ends_at {
            return Some("Shift start must come before shift end".to_string());
        }
        None
    }

    /// Joins the payload with an id into a stored record.
    pub fn into_staff(self, id: u64) -> Staff {
        Staff {
            id,
            name: self.name,
            workdays: self.workdays,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> StaffPayload {
        StaffPayload {
            name: "Ana".to_string(),
            workdays: vec!["MONDAY".to_string(), "TUESDAY".to_string()],
            starts_at: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_staff_payload_deserialize() {
        let json = r#"{
            "name": "Ana",
            "workdays": ["MONDAY"],
            "starts_at": "08:00:00",
            "ends_at": "19:00:00"
        }"#;
        let payload: StaffPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.workdays, vec!["MONDAY"]);
        assert!(payload.validate().is_none());
    }

    #[test]
    fn test_staff_payload_empty_name_rejected() {
        let mut p = payload();
        p.name = "  ".to_string();
        assert!(p.validate().is_some());
    }

    #[test]
    fn test_staff_payload_inverted_shift_rejected() {
        let mut p = payload();
        p.ends_at = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert!(p.validate().is_some());
    }

    #[test]
    fn test_staff_payload_into_staff() {
        let staff = payload().into_staff(7);
        assert_eq!(staff.id, 7);
        assert_eq!(staff.name, "Ana");
        assert_eq!(Staff::KIND, "staff");
    }
}
