/// Home page: the latest listings
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use gigbook_core::{Artist, Listings, Venue};
use serde::Serialize;

/// How many of the newest artists/venues the home page shows
const RECENT_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub artists: Vec<Artist>,
    pub venues: Vec<Venue>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Json<HomeResponse>> {
    let artists = state.db.list_recent_artists(RECENT_LIMIT).await?;
    let venues = state.db.list_recent_venues(RECENT_LIMIT).await?;

    Ok(Json(HomeResponse { artists, venues }))
}
