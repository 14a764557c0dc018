/// Venue routes
use crate::{
    api::{checkbox_checked, split_genres},
    error::Result,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use chrono::Utc;
use gigbook_core::{
    AreaVenues, CreateVenue, Listings, SearchResults, Show, UpdateVenue, Venue, VenueId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VenuesResponse {
    pub areas: Vec<AreaVenues>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub upcoming_shows: Vec<Show>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<Show>,
    pub past_shows_count: usize,
}

/// The venue create/edit form, as submitted (form-encoded)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Comma-separated genre list
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// Checkbox sentinel: `y` when checked, absent when not
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    fn into_create(self) -> CreateVenue {
        CreateVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_talent: checkbox_checked(self.seeking_talent.as_deref()),
            seeking_description: self.seeking_description,
        }
    }

    fn into_update(self) -> UpdateVenue {
        UpdateVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_talent: checkbox_checked(self.seeking_talent.as_deref()),
            seeking_description: self.seeking_description,
        }
    }

    fn from_venue(venue: Venue, city: String, state: String) -> Self {
        Self {
            name: venue.name,
            city,
            state,
            address: venue.address,
            phone: venue.phone,
            genres: Some(gigbook_core::genres::encode(&venue.genres)),
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description,
        }
    }
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<VenuesResponse>> {
    let areas = state.db.venues_by_area().await?;
    Ok(Json(VenuesResponse { areas }))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Venue>>> {
    let results = state.db.search_venues(&form.search_term).await?;
    Ok(Json(results))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    Path(venue_id): Path<VenueId>,
    State(state): State<AppState>,
) -> Result<Json<VenueDetail>> {
    let venue = state.db.get_venue(venue_id).await?;
    let partition = state.db.venue_shows(venue_id, Utc::now()).await?;

    Ok(Json(VenueDetail {
        venue,
        upcoming_shows: partition.upcoming,
        upcoming_shows_count: partition.upcoming_count,
        past_shows: partition.past,
        past_shows_count: partition.past_count,
    }))
}

/// GET /venues/create
pub async fn create_venue_form() -> Json<VenueForm> {
    Json(VenueForm::default())
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect> {
    let venue = state.db.create_venue(form.into_create()).await?;
    tracing::info!("Venue {} was successfully listed", venue.name);

    Ok(Redirect::to("/"))
}

/// GET /venues/:venue_id/delete
pub async fn delete_venue(
    Path(venue_id): Path<VenueId>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    state.db.delete_venue(venue_id).await?;

    Ok(Redirect::to("/venues"))
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    Path(venue_id): Path<VenueId>,
    State(state): State<AppState>,
) -> Result<Json<VenueForm>> {
    let venue = state.db.get_venue(venue_id).await?;
    let area = state.db.get_area(venue.area_id).await?;

    Ok(Json(VenueForm::from_venue(venue, area.city, area.state)))
}

/// POST /venues/:venue_id/edit
pub async fn edit_venue_submission(
    Path(venue_id): Path<VenueId>,
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect> {
    state.db.update_venue(venue_id, form.into_update()).await?;

    Ok(Redirect::to(&format!("/venues/{venue_id}")))
}
