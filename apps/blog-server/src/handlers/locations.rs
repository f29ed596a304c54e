//! Location administration.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::domain::Location;
use blogicum_core::ports::BaseRepository;
use blogicum_shared::ApiResponse;
use blogicum_shared::dto::{CreateLocationRequest, LocationResponse, UpdateLocationRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn location_response(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id,
        name: location.name,
        is_published: location.publication.is_published,
        created_at: location.publication.created_at,
    }
}

async fn load(state: &AppState, id: Uuid) -> AppResult<Location> {
    state
        .locations
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))
}

/// GET /api/admin/locations
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let locations = state.locations.list().await?;
    let body: Vec<_> = locations.into_iter().map(location_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/admin/locations
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateLocationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut location = Location::new(req.name)?;
    if let Some(is_published) = req.is_published {
        location.publication.is_published = is_published;
    }

    let location = state.locations.create(location).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(location_response(location))))
}

/// GET /api/admin/locations/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let location = load(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(location_response(location))))
}

/// PUT /api/admin/locations/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateLocationRequest>,
) -> AppResult<HttpResponse> {
    let mut location = load(&state, path.into_inner()).await?;
    let req = body.into_inner();

    if let Some(name) = req.name {
        location.name = name;
    }
    if let Some(is_published) = req.is_published {
        location.publication.is_published = is_published;
    }

    let location = state.locations.update(location).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(location_response(location))))
}

/// DELETE /api/admin/locations/{id} - posts keep existing without a location.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.locations.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
