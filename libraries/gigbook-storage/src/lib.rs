//! Gigbook Storage
//!
//! `SQLite` database layer for Gigbook listings.
//!
//! This crate provides persistent storage for areas, venues, artists,
//! and shows, with one module per entity owning its own queries
//! (vertical slicing). [`SqliteListings`] wraps a pool and implements
//! the [`gigbook_core::Listings`] trait the server is written against.
//!
//! # Example
//!
//! ```rust,no_run
//! use gigbook_storage::{create_pool, run_migrations, SqliteListings};
//! use gigbook_core::Listings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://gigbook.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteListings::new(pool);
//! let venues = store.list_recent_venues(10).await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod areas;
pub mod artists;
pub mod shows;
pub mod venues;

pub use context::SqliteListings;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://gigbook.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
