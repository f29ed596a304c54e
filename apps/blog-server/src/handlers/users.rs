//! Author administration.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::domain::User;
use blogicum_core::ports::BaseRepository;
use blogicum_shared::ApiResponse;
use blogicum_shared::dto::{CreateUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    }
}

/// GET /api/admin/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let body: Vec<_> = users.into_iter().map(user_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/admin/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Username {:?} is already taken",
            req.username
        )));
    }

    let user = state.users.create(User::new(req.username, req.email)?).await?;
    tracing::info!(user_id = %user.id, "Author registered");

    Ok(HttpResponse::Created().json(ApiResponse::ok(user_response(user))))
}

/// GET /api/admin/users/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(user))))
}

/// DELETE /api/admin/users/{id} - removes the author's posts as well.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete(id).await?;
    tracing::info!(user_id = %id, "Author deleted with their posts");

    Ok(HttpResponse::NoContent().finish())
}
