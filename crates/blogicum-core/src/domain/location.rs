use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::publication::Publication;
use super::validation::{TITLE_MAX_LEN, Validate, preview, require_text};
use crate::error::DomainError;

/// Location entity - the place a post is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub publication: Publication,
}

impl Location {
    pub fn new(name: String) -> Result<Self, DomainError> {
        let location = Self {
            id: Uuid::new_v4(),
            name,
            publication: Publication::new(),
        };
        location.validate()?;
        Ok(location)
    }
}

impl Validate for Location {
    fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.name, TITLE_MAX_LEN, "name")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name={:?}, {}", preview(&self.name), self.publication)
    }
}
