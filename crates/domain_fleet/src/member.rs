//! Club member records
//!
//! Members ride on trips and owe a share of each trip's cost. A member is
//! referenced by trips, never owned by one. Email is not required to be
//! unique.

use serde::{Deserialize, Serialize};

use core_kernel::MemberId;

/// A club member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Display name
    pub name: String,
    /// Contact email, if known
    pub email: Option<String>,
    /// Alternate names the member goes by; used when matching riders
    /// entered by name on the trip form
    pub aliases: Vec<String>,
    /// Whether the member is active in the club
    pub is_active: bool,
}

impl Member {
    /// Creates a new active member
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            aliases: Vec::new(),
            is_active: true,
        }
    }

    /// Sets the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Marks the member inactive
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns true if the given name matches this member's name or one of
    /// their aliases, case-insensitively
    pub fn matches_name(&self, name: &str) -> bool {
        if self.name.eq_ignore_ascii_case(name) {
            return true;
        }
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}
