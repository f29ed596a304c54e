use chrono::{DateTime, Duration, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DbConn, MockDatabase};
use uuid::Uuid;

use blogicum_core::domain::{Category, Location, Post, Publication, Slug, User};
use blogicum_core::error::RepoError;
use blogicum_core::ports::BaseRepository;

use crate::database::entity::{category, post};
use crate::database::repositories::{Repositories, SeaOrmPostRepository};

/// In-memory SQLite migrated with the real schema, foreign keys enforced.
async fn setup() -> Repositories {
    let options = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db: DbConn = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Repositories::new(db)
}

async fn author(repos: &Repositories, username: &str) -> User {
    let user = User::new(username.to_string(), format!("{username}@example.com")).unwrap();
    repos.users.create(user).await.unwrap()
}

async fn category(repos: &Repositories, slug: &str) -> Category {
    let category = Category::new(
        format!("Category {slug}"),
        "About things".to_string(),
        Slug::parse(slug).unwrap(),
    )
    .unwrap();
    repos.categories.create(category).await.unwrap()
}

fn post_at(author: &User, title: &str, pub_date: DateTime<Utc>) -> Post {
    Post::new(
        author.id,
        title.to_string(),
        "Body text".to_string(),
        pub_date,
    )
    .unwrap()
}

fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_find_post_by_id_maps_row() {
    let post_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();
    let category_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            title: "Test Post".to_owned(),
            text: "Content".to_owned(),
            pub_date: now.into(),
            author_id,
            location_id: None,
            category_id: Some(category_id),
            is_published: false,
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.category_id, Some(category_id));
    assert!(post.location_id.is_none());
    assert!(!post.publication.is_published);
}

#[tokio::test]
async fn test_repositories_over_mock_connection() {
    let category_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![category::Model {
            id: category_id,
            title: "Travel".to_owned(),
            description: "Trips".to_owned(),
            slug: "travel".to_owned(),
            is_published: true,
            created_at: now.into(),
        }]])
        .into_connection();

    let repos = Repositories::new(db);
    let shared = repos.clone();

    let found = shared
        .categories
        .find_by_slug(&Slug::parse("travel").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, category_id);
    assert_eq!(found.slug.as_str(), "travel");
}

#[tokio::test]
async fn test_new_records_are_published_and_stamped() {
    let repos = setup().await;
    let before = Utc::now() - Duration::seconds(1);

    let author = author(&repos, "leo").await;
    let category = category(&repos, "travel").await;
    let location = repos
        .locations
        .create(Location::new("Kazan".to_string()).unwrap())
        .await
        .unwrap();
    let post = repos
        .posts
        .create(
            post_at(&author, "Trip", Utc::now())
                .with_category(category.id)
                .with_location(location.id),
        )
        .await
        .unwrap();

    for publication in [category.publication, location.publication, post.publication] {
        assert!(publication.is_published);
        assert!(publication.created_at >= before);
    }

    let stored = repos.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.category_id, Some(category.id));
    assert_eq!(stored.location_id, Some(location.id));
    assert_eq!(stored.author_id, author.id);
}

#[tokio::test]
async fn test_duplicate_slug_is_rejected() {
    let repos = setup().await;
    category(&repos, "news").await;

    let duplicate = Category::new(
        "Other news".to_string(),
        "Same slug".to_string(),
        Slug::parse("news").unwrap(),
    )
    .unwrap();
    let result = repos.categories.create(duplicate).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
    assert_eq!(repos.categories.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_category_by_slug() {
    let repos = setup().await;
    let created = category(&repos, "food").await;

    let found = repos
        .categories
        .find_by_slug(&Slug::parse("food").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);

    let missing = repos
        .categories
        .find_by_slug(&Slug::parse("nope").unwrap())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_deleting_location_clears_post_location() {
    let repos = setup().await;
    let author = author(&repos, "leo").await;
    let location = repos
        .locations
        .create(Location::new("Sochi".to_string()).unwrap())
        .await
        .unwrap();
    let post = repos
        .posts
        .create(post_at(&author, "Sea", Utc::now()).with_location(location.id))
        .await
        .unwrap();

    repos.locations.delete(location.id).await.unwrap();

    let stored = repos.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert!(stored.location_id.is_none());
    assert!(repos.posts.find_by_location(location.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_category_clears_post_category() {
    let repos = setup().await;
    let author = author(&repos, "leo").await;
    let category = category(&repos, "cats").await;
    let post = repos
        .posts
        .create(post_at(&author, "Whiskers", Utc::now()).with_category(category.id))
        .await
        .unwrap();
    assert_eq!(repos.posts.find_by_category(category.id).await.unwrap().len(), 1);

    repos.categories.delete(category.id).await.unwrap();

    let stored = repos.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert!(stored.category_id.is_none());
}

#[tokio::test]
async fn test_deleting_author_deletes_posts() {
    let repos = setup().await;
    let leo = author(&repos, "leo").await;
    let ann = author(&repos, "ann").await;
    let doomed = repos
        .posts
        .create(post_at(&leo, "Gone", Utc::now()))
        .await
        .unwrap();
    let kept = repos
        .posts
        .create(post_at(&ann, "Stays", Utc::now()))
        .await
        .unwrap();

    repos.users.delete(leo.id).await.unwrap();

    assert!(repos.posts.find_by_id(doomed.id).await.unwrap().is_none());
    assert!(repos.posts.find_by_id(kept.id).await.unwrap().is_some());
    assert!(repos.posts.find_by_author(leo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_posts_are_listed_newest_first() {
    let repos = setup().await;
    let author = author(&repos, "leo").await;
    let base = Utc::now() - Duration::days(30);

    for (title, days) in [("middle", 10), ("oldest", 1), ("newest", 20)] {
        repos
            .posts
            .create(post_at(&author, title, base + Duration::days(days)))
            .await
            .unwrap();
    }

    let all = repos.posts.list().await.unwrap();
    assert_eq!(titles(&all), vec!["newest", "middle", "oldest"]);

    let by_author = repos.posts.find_by_author(author.id).await.unwrap();
    assert_eq!(titles(&by_author), vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_visible_feed_hides_drafts_and_scheduled_posts() {
    let repos = setup().await;
    let author = author(&repos, "leo").await;
    let open = category(&repos, "open").await;
    let mut closed = category(&repos, "closed").await;
    closed.publication.is_published = false;
    let closed = repos.categories.update(closed).await.unwrap();

    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    let mut draft = post_at(&author, "draft", yesterday);
    draft.publication = Publication::hidden();

    for post in [
        post_at(&author, "plain", now - Duration::days(2)),
        post_at(&author, "in open", yesterday).with_category(open.id),
        post_at(&author, "in closed", yesterday).with_category(closed.id),
        post_at(&author, "scheduled", now + Duration::days(1)),
        draft,
    ] {
        repos.posts.create(post).await.unwrap();
    }

    let feed = repos.posts.list_visible(now).await.unwrap();
    assert_eq!(titles(&feed), vec!["in open", "plain"]);

    let in_open = repos
        .posts
        .list_visible_in_category(open.id, now)
        .await
        .unwrap();
    assert_eq!(titles(&in_open), vec!["in open"]);

    // Everything is still there for the admin listing.
    assert_eq!(repos.posts.list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_keeps_created_at() {
    let repos = setup().await;
    let created = category(&repos, "history").await;

    let mut changed = created.clone();
    changed.title = "Ancient history".to_string();
    changed.publication.created_at = Utc::now() + Duration::days(365);

    let updated = repos.categories.update(changed).await.unwrap();
    assert_eq!(updated.title, "Ancient history");
    assert_eq!(updated.publication.created_at, created.publication.created_at);

    let stored = repos.categories.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.publication.created_at, created.publication.created_at);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let repos = setup().await;
    let ghost = Location::new("Atlantis".to_string()).unwrap();

    let result = repos.locations.update(ghost.clone()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));

    let result = repos.locations.delete(ghost.id).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_post_with_unknown_category_is_rejected() {
    let repos = setup().await;
    let author = author(&repos, "leo").await;

    let result = repos
        .posts
        .create(post_at(&author, "Orphan", Utc::now()).with_category(Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(RepoError::MissingReference(_))));
}

#[tokio::test]
async fn test_invalid_entity_is_not_written() {
    let repos = setup().await;
    let mut location = Location::new("Valid".to_string()).unwrap();
    location.name = "x".repeat(257);

    let result = repos.locations.create(location).await;
    assert!(matches!(result, Err(RepoError::Validation(_))));
    assert!(repos.locations.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let repos = setup().await;
    author(&repos, "leo").await;

    let again = User::new("leo".to_string(), String::new()).unwrap();
    let result = repos.users.create(again).await;
    assert!(matches!(result, Err(RepoError::Constraint(_))));

    let found = repos.users.find_by_username("leo").await.unwrap();
    assert!(found.is_some());
}
