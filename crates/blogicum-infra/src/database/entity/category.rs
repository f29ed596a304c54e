//! Category entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

use blogicum_core::domain::{Category, Publication, Slug};
use blogicum_core::error::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        super::stamp_created_at(&mut self.created_at, insert);
        Ok(self)
    }
}

/// Rows are written through [`Slug`], so a stored slug that fails to parse
/// means the table was edited by hand. It is surfaced as a validation error
/// rather than silently accepted.
impl TryFrom<Model> for Category {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            slug: Slug::parse(model.slug)?,
            publication: Publication {
                is_published: model.is_published,
                created_at: model.created_at.into(),
            },
        })
    }
}

impl From<Category> for ActiveModel {
    fn from(category: Category) -> Self {
        Self {
            id: Set(category.id),
            title: Set(category.title),
            description: Set(category.description),
            slug: Set(category.slug.into()),
            is_published: Set(category.publication.is_published),
            created_at: Set(category.publication.created_at.into()),
        }
    }
}
