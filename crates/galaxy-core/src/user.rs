//! User accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;

/// Display name used when an idea's owner can no longer be resolved
pub const UNKNOWN_USER_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Normalize and validate an email address for signup and login
pub fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    };
    if !valid {
        bail_invalid!("email", email);
    }
    Ok(email)
}

/// Validate a display name
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail_invalid!("name", "(empty)");
    }
    Ok(name.to_string())
}
