//! HTTP handlers and route configuration.

mod categories;
mod feed;
mod health;
mod locations;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same problem-details shape as every other error.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(feed::index))
            .route("/posts/{id}", web::get().to(feed::post_detail))
            .route("/category/{slug}", web::get().to(feed::category_posts))
            // Admin routes
            .service(
                web::scope("/admin")
                    .service(
                        web::scope("/users")
                            .route("", web::get().to(users::list))
                            .route("", web::post().to(users::create))
                            .route("/{id}", web::get().to(users::get))
                            .route("/{id}", web::delete().to(users::delete)),
                    )
                    .service(
                        web::scope("/categories")
                            .route("", web::get().to(categories::list))
                            .route("", web::post().to(categories::create))
                            .route("/{id}", web::get().to(categories::get))
                            .route("/{id}", web::put().to(categories::update))
                            .route("/{id}", web::delete().to(categories::delete)),
                    )
                    .service(
                        web::scope("/locations")
                            .route("", web::get().to(locations::list))
                            .route("", web::post().to(locations::create))
                            .route("/{id}", web::get().to(locations::get))
                            .route("/{id}", web::put().to(locations::update))
                            .route("/{id}", web::delete().to(locations::delete)),
                    )
                    .service(
                        web::scope("/posts")
                            .route("", web::get().to(posts::list))
                            .route("", web::post().to(posts::create))
                            .route("/{id}", web::get().to(posts::get))
                            .route("/{id}", web::put().to(posts::update))
                            .route("/{id}", web::delete().to(posts::delete)),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::{Duration, Utc};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};
    use serde_json::json;

    use blogicum_shared::ApiResponse;
    use blogicum_shared::dto::{
        CategoryPostsResponse, CategoryResponse, LocationResponse, PostResponse, UserResponse,
    };

    use super::*;
    use crate::state::AppState;

    async fn state() -> web::Data<AppState> {
        let options = ConnectOptions::new("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false)
            .to_owned();
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        web::Data::new(AppState::new(db))
    }

    #[actix_web::test]
    async fn test_health() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_category_slug_rules() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let body = json!({"title": "Travel", "description": "Trips", "slug": "travel"});
        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(&body)
            .to_request();
        let created: ApiResponse<CategoryResponse> = test::call_and_read_body_json(&app, req).await;
        let created = created.data.unwrap();
        assert_eq!(created.slug, "travel");
        assert!(created.is_published);

        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(json!({"title": "Bad", "description": "d", "slug": "no spaces"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/locations")
            .set_json(json!({"title": "no name field"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_post_with_unknown_author_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .set_json(json!({
                "title": "Orphan",
                "text": "Nobody wrote this",
                "pub_date": Utc::now(),
                "author_id": uuid::Uuid::new_v4(),
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_public_feed() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/users")
            .set_json(json!({"username": "leo"}))
            .to_request();
        let author: ApiResponse<UserResponse> = test::call_and_read_body_json(&app, req).await;
        let author = author.data.unwrap();

        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(json!({
                "title": "Hidden",
                "description": "Not yet",
                "slug": "hidden",
                "is_published": false,
            }))
            .to_request();
        let hidden: ApiResponse<CategoryResponse> =
            test::call_and_read_body_json(&app, req).await;
        let hidden = hidden.data.unwrap();

        let now = Utc::now();
        let mut ids = Vec::new();
        for (title, pub_date, category_id) in [
            ("visible", now - Duration::days(1), None),
            ("scheduled", now + Duration::days(1), None),
            ("in hidden", now - Duration::days(1), Some(hidden.id)),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/admin/posts")
                .set_json(json!({
                    "title": title,
                    "text": "Body",
                    "pub_date": pub_date,
                    "author_id": author.id,
                    "category_id": category_id,
                }))
                .to_request();
            let post: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
            ids.push(post.data.unwrap().id);
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let feed: ApiResponse<Vec<PostResponse>> = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<_> = feed.data.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["visible"]);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", ids[0]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        for id in &ids[1..] {
            let req = test::TestRequest::get()
                .uri(&format!("/api/posts/{}", id))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        }

        let req = test::TestRequest::get().uri("/api/category/hidden").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        // Publishing the category reveals its posts.
        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/categories/{}", hidden.id))
            .set_json(json!({"is_published": true}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/category/hidden").to_request();
        let page: ApiResponse<CategoryPostsResponse> =
            test::call_and_read_body_json(&app, req).await;
        let page = page.data.unwrap();
        assert_eq!(page.category.id, hidden.id);
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].title, "in hidden");
    }

    #[actix_web::test]
    async fn test_deleting_location_keeps_post() {
        let app =
            test::init_service(App::new().app_data(state().await).configure(configure_routes))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/users")
            .set_json(json!({"username": "ann", "email": "ann@example.com"}))
            .to_request();
        let author: ApiResponse<UserResponse> = test::call_and_read_body_json(&app, req).await;
        let author = author.data.unwrap();

        let req = test::TestRequest::post()
            .uri("/api/admin/locations")
            .set_json(json!({"name": "Tver"}))
            .to_request();
        let location: ApiResponse<LocationResponse> =
            test::call_and_read_body_json(&app, req).await;
        let location = location.data.unwrap();

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .set_json(json!({
                "title": "Walk",
                "text": "Along the Volga",
                "pub_date": Utc::now(),
                "author_id": author.id,
                "location_id": location.id,
            }))
            .to_request();
        let post: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        let post = post.data.unwrap();
        assert_eq!(post.location_id, Some(location.id));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/locations/{}", location.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/posts/{}", post.id))
            .to_request();
        let stored: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored.data.unwrap().location_id, None);

        // Removing the author takes the post with it.
        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/users/{}", author.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/posts/{}", post.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
