use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Category, Location, Post, Slug, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Write changed attributes of an existing entity.
    ///
    /// The creation timestamp is never overwritten.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    async fn list(&self) -> Result<Vec<User>, RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, RepoError>;

    async fn list(&self) -> Result<Vec<Category>, RepoError>;
}

/// Location repository.
#[async_trait]
pub trait LocationRepository: BaseRepository<Location, Uuid> {
    async fn list(&self) -> Result<Vec<Location>, RepoError>;
}

/// Post repository. Every listing is ordered by `pub_date`, newest first.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    async fn find_by_category(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError>;

    async fn find_by_location(&self, location_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Posts a reader may see at `now`: published, not scheduled for later,
    /// and either uncategorized or filed under a published category.
    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError>;

    /// Visible posts of one category.
    async fn list_visible_in_category(
        &self,
        category_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError>;
}
