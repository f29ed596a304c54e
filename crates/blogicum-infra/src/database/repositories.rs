//! SeaORM repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use blogicum_core::domain::{Category, Location, Post, Slug, User};
use blogicum_core::error::RepoError;
use blogicum_core::ports::{
    CategoryRepository, LocationRepository, PostRepository, UserRepository,
};

use super::base_repo::{SeaOrmRepository, into_domain};
use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::location::{self, Entity as LocationEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::map_db_err;

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

/// SeaORM category repository.
pub type SeaOrmCategoryRepository = SeaOrmRepository<CategoryEntity>;

/// SeaORM location repository.
pub type SeaOrmLocationRepository = SeaOrmRepository<LocationEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::Username)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        into_domain(result)
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, RepoError> {
        tracing::debug!(%slug, "Finding category by slug");

        let result = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug.as_str()))
            .one(self.conn())
            .await
            .map_err(map_db_err)?;

        result.map(Category::try_from).transpose().map_err(Into::into)
    }

    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Title)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        into_domain(result)
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, RepoError> {
        let result = LocationEntity::find()
            .order_by_asc(location::Column::Name)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        into_domain(result)
    }
}

impl SeaOrmPostRepository {
    async fn fetch(&self, query: Select<PostEntity>) -> Result<Vec<Post>, RepoError> {
        let result = query
            .order_by_desc(post::Column::PubDate)
            .all(self.conn())
            .await
            .map_err(map_db_err)?;

        into_domain(result)
    }

    /// Published, already due, and outside any hidden category.
    fn visible(now: DateTime<Utc>) -> Select<PostEntity> {
        let now: DateTimeWithTimeZone = now.into();

        PostEntity::find()
            .left_join(CategoryEntity)
            .filter(post::Column::IsPublished.eq(true))
            .filter(post::Column::PubDate.lte(now))
            .filter(
                Condition::any()
                    .add(post::Column::CategoryId.is_null())
                    .add(category::Column::IsPublished.eq(true)),
            )
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        self.fetch(PostEntity::find()).await
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        self.fetch(PostEntity::find().filter(post::Column::AuthorId.eq(author_id)))
            .await
    }

    async fn find_by_category(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        self.fetch(PostEntity::find().filter(post::Column::CategoryId.eq(category_id)))
            .await
    }

    async fn find_by_location(&self, location_id: Uuid) -> Result<Vec<Post>, RepoError> {
        self.fetch(PostEntity::find().filter(post::Column::LocationId.eq(location_id)))
            .await
    }

    async fn list_visible(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError> {
        self.fetch(Self::visible(now)).await
    }

    async fn list_visible_in_category(
        &self,
        category_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        self.fetch(Self::visible(now).filter(post::Column::CategoryId.eq(category_id)))
            .await
    }
}

/// All repositories over one connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Repositories {
    pub fn new(db: DbConn) -> Self {
        let db = Arc::new(db);
        Self {
            users: Arc::new(SeaOrmUserRepository::shared(db.clone())),
            categories: Arc::new(SeaOrmCategoryRepository::shared(db.clone())),
            locations: Arc::new(SeaOrmLocationRepository::shared(db.clone())),
            posts: Arc::new(SeaOrmPostRepository::shared(db)),
        }
    }
}
