//! Post administration. Lists every post, including drafts and scheduled ones.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::domain::Post;
use blogicum_core::ports::BaseRepository;
use blogicum_shared::ApiResponse;
use blogicum_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        text: post.text,
        pub_date: post.pub_date,
        author_id: post.author_id,
        location_id: post.location_id,
        category_id: post.category_id,
        is_published: post.publication.is_published,
        created_at: post.publication.created_at,
    }
}

pub(super) fn post_list(posts: Vec<Post>) -> ApiResponse<Vec<PostResponse>> {
    ApiResponse::ok(posts.into_iter().map(post_response).collect())
}

async fn load(state: &AppState, id: Uuid) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
}

/// GET /api/admin/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(post_list(posts)))
}

/// POST /api/admin/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut post = Post::new(req.author_id, req.title, req.text, req.pub_date)?;
    post.location_id = req.location_id;
    post.category_id = req.category_id;
    if let Some(is_published) = req.is_published {
        post.publication.is_published = is_published;
    }

    let post = state.posts.create(post).await?;
    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(post_response(post))))
}

/// GET /api/admin/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = load(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// PUT /api/admin/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = load(&state, path.into_inner()).await?;
    let req = body.into_inner();

    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(text) = req.text {
        post.text = text;
    }
    if let Some(pub_date) = req.pub_date {
        post.pub_date = pub_date;
    }
    if let Some(location_id) = req.location_id {
        post.location_id = location_id;
    }
    if let Some(category_id) = req.category_id {
        post.category_id = category_id;
    }
    if let Some(is_published) = req.is_published {
        post.publication.is_published = is_published;
    }

    let post = state.posts.update(post).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(post))))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
