use chrono::Utc;

use super::Store;
use crate::error::{GalaxyError, Result};
use crate::id;
use crate::user::{normalize_email, validate_name, User};

impl Store {
    /// Register a new user and make them the active user
    pub fn signup(&self, email: &str, name: &str) -> Result<User> {
        let email = normalize_email(email)?;
        let name = validate_name(name)?;

        if self.db.get_user_by_email(&email)?.is_some() {
            return Err(GalaxyError::already_exists("email", &email));
        }

        let user = User {
            id: id::generate(id::USER_PREFIX),
            email,
            name,
            created_at: Utc::now(),
        };
        self.db.insert_user(&user)?;
        self.set_active_user(&user.id)?;

        tracing::info!(user_id = %user.id, "signed up");
        Ok(user)
    }

    /// Make the user registered under `email` the active user
    pub fn login(&self, email: &str) -> Result<User> {
        let email = normalize_email(email)?;
        let user = self
            .db
            .get_user_by_email(&email)?
            .ok_or_else(|| GalaxyError::not_found("user", &email))?;
        self.set_active_user(&user.id)?;

        tracing::debug!(user_id = %user.id, "logged in");
        Ok(user)
    }
}
