//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using real SQLite files (not
//! in-memory) to match production behavior and properly test
//! migrations and constraints.

use gigbook_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = gigbook_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        gigbook_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Fixture: venue creation payload with sensible defaults
pub fn venue_input(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        image_link: Some("https://example.com/venue.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

/// Fixture: artist creation payload with sensible defaults
pub fn artist_input(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        phone: Some("326-123-5000".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://example.com/artist.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}
