use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::publication::Publication;
use super::user::User;
use super::validation::{TITLE_MAX_LEN, Validate, preview, require_non_blank, require_text};
use crate::error::DomainError;

/// Post entity - a blog publication.
///
/// `pub_date` may lie in the future; such a post stays hidden from readers
/// until that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub location_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    #[serde(flatten)]
    pub publication: Publication,
}

impl Post {
    /// Create a new, published post without location or category.
    pub fn new(
        author_id: Uuid,
        title: String,
        text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let post = Self {
            id: Uuid::new_v4(),
            title,
            text,
            pub_date,
            author_id,
            location_id: None,
            category_id: None,
            publication: Publication::new(),
        };
        post.validate()?;
        Ok(post)
    }

    pub fn with_location(mut self, location_id: Uuid) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Published and no longer scheduled for the future.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.publication.is_published && self.pub_date <= now
    }
}

impl Validate for Post {
    fn validate(&self) -> Result<(), DomainError> {
        require_text(&self.title, TITLE_MAX_LEN, "title")?;
        require_non_blank(&self.text, "text")
    }
}

fn opt_id(id: Option<Uuid>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "None".to_string())
}

impl Post {
    /// Debug rendering with the author's username in place of `author_id`.
    pub fn with_author<'a>(&'a self, author: &'a User) -> AuthoredPost<'a> {
        AuthoredPost { post: self, author }
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>, author: &dyn fmt::Display) -> fmt::Result {
        write!(
            f,
            "title={:?}, text={:?}, pub_date={}, author={}, location={}, category={}, {}",
            preview(&self.title),
            preview(&self.text),
            self.pub_date.to_rfc3339(),
            author,
            opt_id(self.location_id),
            opt_id(self.category_id),
            self.publication
        )
    }
}

/// A post only stores its author's id, so the plain `Display` prints the id.
impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fields(f, &self.author_id)
    }
}

/// [`Post`] rendered together with its loaded author.
pub struct AuthoredPost<'a> {
    post: &'a Post,
    author: &'a User,
}

impl fmt::Display for AuthoredPost<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.post.write_fields(f, &self.author.username)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn post(pub_date: DateTime<Utc>) -> Post {
        Post::new(
            Uuid::new_v4(),
            "Mountains".to_string(),
            "Notes from the trail".to_string(),
            pub_date,
        )
        .unwrap()
    }

    #[test]
    fn test_new_post_defaults() {
        let post = post(Utc::now());
        assert!(post.publication.is_published);
        assert!(post.location_id.is_none());
        assert!(post.category_id.is_none());
    }

    #[test]
    fn test_future_post_is_not_visible() {
        let now = Utc::now();
        assert!(!post(now + Duration::days(1)).is_visible_at(now));
        assert!(post(now - Duration::days(1)).is_visible_at(now));
    }

    #[test]
    fn test_unpublished_post_is_not_visible() {
        let now = Utc::now();
        let mut hidden = post(now - Duration::hours(1));
        hidden.publication = Publication::hidden();
        assert!(!hidden.is_visible_at(now));
    }

    #[test]
    fn test_display_truncates_text() {
        let mut post = post(Utc::now()).with_category(Uuid::nil());
        post.text = "x".repeat(100);
        let rendered = post.to_string();
        assert!(rendered.contains(&format!("text={:?}", "x".repeat(25))));
        assert!(rendered.contains("location=None"));
        assert!(rendered.contains(&format!("category={}", Uuid::nil())));
    }

    #[test]
    fn test_display_names_author() {
        let author = User::new("leo".to_string(), String::new()).unwrap();
        let mut post = post(Utc::now());
        post.author_id = author.id;

        assert!(post.to_string().contains(&format!("author={}", author.id)));
        assert!(post.with_author(&author).to_string().contains("author=leo,"));
    }

    #[test]
    fn test_rejects_blank_text() {
        let result = Post::new(Uuid::new_v4(), "Title".to_string(), "  ".to_string(), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
