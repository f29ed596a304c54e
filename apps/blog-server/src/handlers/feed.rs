//! Public pages: what a reader sees.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use blogicum_core::domain::Slug;
use blogicum_core::ports::BaseRepository;
use blogicum_shared::ApiResponse;
use blogicum_shared::dto::CategoryPostsResponse;

use super::categories::category_response;
use super::posts::{post_list, post_response};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_visible(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(post_list(posts)))
}

/// GET /api/posts/{id}
///
/// Drafts, scheduled posts and posts in hidden categories answer 404.
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let not_found = || AppError::NotFound(format!("Post {} not found", id));

    let post = state.posts.find_by_id(id).await?.ok_or_else(not_found)?;
    if !post.is_visible_at(Utc::now()) {
        return Err(not_found());
    }

    if let Some(category_id) = post.category_id {
        let category = state.categories.find_by_id(category_id).await?;
        if !category.is_some_and(|c| c.is_published()) {
            return Err(not_found());
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// GET /api/category/{slug}
pub async fn category_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.into_inner();
    let not_found = || AppError::NotFound(format!("Category {:?} not found", raw));

    // A malformed slug cannot name any category.
    let slug = Slug::parse(raw.as_str()).map_err(|_| not_found())?;

    let category = state
        .categories
        .find_by_slug(&slug)
        .await?
        .filter(|c| c.is_published())
        .ok_or_else(not_found)?;

    let posts = state
        .posts
        .list_visible_in_category(category.id, Utc::now())
        .await?;

    let body = CategoryPostsResponse {
        category: category_response(category),
        posts: posts.into_iter().map(post_response).collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}
