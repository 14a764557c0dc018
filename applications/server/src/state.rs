/// Shared application state
use gigbook_storage::SqliteListings;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The store is an explicit handle injected into each handler through
/// axum's `State` extractor; there is no global database handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqliteListings>,
}

impl AppState {
    pub fn new(db: Arc<SqliteListings>) -> Self {
        Self { db }
    }
}
