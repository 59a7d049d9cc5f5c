//! Account domain model

use serde::{Deserialize, Serialize};

use super::Entity;

// == Account ==
/// A user account that places bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub display_name: String,
}

impl Entity for Account {
    const KIND: &'static str = "account";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

// == Account Payload ==
#[derive(Debug, Clone, Deserialize)]
pub struct AccountPayload {
    pub username: String,
    pub email: String,
    pub display_name: String,
}

impl AccountPayload {
    pub fn validate(&self) -> Option<String> {
        if self.username.trim().is_empty() {
            return Some("Username cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Some("Email address is malformed".to_string());
        }
        None
    }

    pub fn into_account(self, id: u64) -> Account {
        Account {
            id,
            username: self.username,
            email: self.email,
            display_name: self.display_name,
        }
    }
}
