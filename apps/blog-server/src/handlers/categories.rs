//! Category administration.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::domain::{Category, Slug};
use blogicum_core::ports::BaseRepository;
use blogicum_shared::ApiResponse;
use blogicum_shared::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn category_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        title: category.title,
        description: category.description,
        slug: category.slug.into(),
        is_published: category.publication.is_published,
        created_at: category.publication.created_at,
    }
}

async fn load(state: &AppState, id: Uuid) -> AppResult<Category> {
    state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
}

/// GET /api/admin/categories
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list().await?;
    let body: Vec<_> = categories.into_iter().map(category_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/admin/categories
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut category = Category::new(req.title, req.description, Slug::parse(req.slug)?)?;
    if let Some(is_published) = req.is_published {
        category.publication.is_published = is_published;
    }

    let category = state.categories.create(category).await?;
    tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(category_response(category))))
}

/// GET /api/admin/categories/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let category = load(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category_response(category))))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let mut category = load(&state, path.into_inner()).await?;
    let req = body.into_inner();

    if let Some(title) = req.title {
        category.title = title;
    }
    if let Some(description) = req.description {
        category.description = description;
    }
    if let Some(slug) = req.slug {
        category.slug = Slug::parse(slug)?;
    }
    if let Some(is_published) = req.is_published {
        category.publication.is_published = is_published;
    }

    let category = state.categories.update(category).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category_response(category))))
}

/// DELETE /api/admin/categories/{id} - posts keep existing, uncategorized.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.categories.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
