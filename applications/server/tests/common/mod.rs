/// Common test utilities and fixtures
use axum::Router;
use gigbook_core::{CreateArtist, CreateVenue};
use gigbook_server::{router, state::AppState};
use gigbook_storage::SqliteListings;
use std::sync::Arc;
use tempfile::TempDir;

/// A router wired to a throwaway database
pub struct TestApp {
    pub app: Router,
    pub db: Arc<SqliteListings>,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
pub async fn create_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = gigbook_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    gigbook_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let db = Arc::new(SqliteListings::new(pool));
    let app = router(AppState::new(Arc::clone(&db)));

    TestApp {
        app,
        db,
        _temp_dir: temp_dir,
    }
}

/// Fixture: venue creation payload
pub fn venue_input(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: None,
        phone: None,
        genres: vec!["Jazz".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

/// Fixture: artist creation payload
pub fn artist_input(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        phone: None,
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}
