use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{EMAIL_MAX_LEN, USERNAME_MAX_LEN, Validate, require_max_len, require_text};
use crate::error::DomainError;

/// User entity - the author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamp.
    pub fn new(username: String, email: String) -> Result<Self, DomainError> {
        let user = Self {
            id: Uuid::new_v4(),
            username,
            email,
            created_at: Utc::now(),
        };
        user.validate()?;
        Ok(user)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.username, USERNAME_MAX_LEN, "username")?;
        require_max_len(&self.email, EMAIL_MAX_LEN, "email")?;
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(DomainError::Validation("email must contain '@'".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
