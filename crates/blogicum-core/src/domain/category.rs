use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::publication::Publication;
use super::slug::Slug;
use super::validation::{TITLE_MAX_LEN, Validate, preview, require_non_blank, require_text};
use crate::error::DomainError;

/// Category entity - a themed section posts can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: Slug,
    #[serde(flatten)]
    pub publication: Publication,
}

impl Category {
    /// Create a new, published category.
    pub fn new(title: String, description: String, slug: Slug) -> Result<Self, DomainError> {
        let category = Self {
            id: Uuid::new_v4(),
            title,
            description,
            slug,
            publication: Publication::new(),
        };
        category.validate()?;
        Ok(category)
    }

    pub fn is_published(&self) -> bool {
        self.publication.is_published
    }
}

impl Validate for Category {
    fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.title, TITLE_MAX_LEN, "title")?;
        require_non_blank(&self.description, "description")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "title={:?}, description={:?}, slug={:?}, {}",
            preview(&self.title),
            self.description,
            self.slug.as_str(),
            self.publication
        )
    }
}
