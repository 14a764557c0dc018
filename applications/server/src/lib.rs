//! Gigbook server library
//!
//! Route handlers, configuration, and error mapping for the listings
//! HTTP application. The binary in `main.rs` wires this together with
//! the SQLite store.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// Shared between the binary and the integration tests so both drive
/// the exact same surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home::index))
        // Venues
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::create_venue_form).post(api::venues::create_venue_submission),
        )
        .route("/venues/:venue_id", get(api::venues::show_venue))
        .route("/venues/:venue_id/delete", get(api::venues::delete_venue))
        .route(
            "/venues/:venue_id/edit",
            get(api::venues::edit_venue_form).post(api::venues::edit_venue_submission),
        )
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::create_artist_form).post(api::artists::create_artist_submission),
        )
        .route("/artists/:artist_id", get(api::artists::show_artist))
        .route("/artists/:artist_id/delete", get(api::artists::delete_artist))
        .route(
            "/artists/:artist_id/edit",
            get(api::artists::edit_artist_form).post(api::artists::edit_artist_submission),
        )
        // Shows
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::create_show_form).post(api::shows::create_show_submission),
        )
        .fallback(api::fallback_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
