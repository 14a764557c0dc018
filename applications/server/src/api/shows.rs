/// Show routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, response::Redirect, Form, Json};
use chrono::{DateTime, NaiveDateTime, Utc};
use gigbook_core::{CreateShow, Listings, Show};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ShowsResponse {
    pub shows: Vec<Show>,
}

/// The show creation form, as submitted (form-encoded)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: i64,
    #[serde(default)]
    pub venue_id: i64,
    #[serde(default)]
    pub start_time: String,
}

/// Accept the datetime picker's `2025-06-15 21:00:00` format, or a
/// full RFC 3339 timestamp.
fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| ServerError::BadRequest(format!("Invalid start_time: {raw}")))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<ShowsResponse>> {
    let shows = state.db.list_shows().await?;
    Ok(Json(ShowsResponse { shows }))
}

/// GET /shows/create
pub async fn create_show_form() -> Json<ShowForm> {
    Json(ShowForm::default())
}

/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Redirect> {
    let start_time = parse_start_time(&form.start_time)?;

    state
        .db
        .create_show(CreateShow {
            artist_id: form.artist_id,
            venue_id: form.venue_id,
            start_time,
        })
        .await?;
    tracing::info!("Show was successfully listed");

    Ok(Redirect::to("/"))
}
