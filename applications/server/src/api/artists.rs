/// Artist routes
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
    Artist, ArtistId, CreateArtist, Listings, SearchResults, Show, UpdateArtist,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub upcoming_shows: Vec<Show>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<Show>,
    pub past_shows_count: usize,
}

/// The artist create/edit form, as submitted (form-encoded)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    /// Comma-separated genre list
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// Checkbox sentinel: `y` when checked, absent when not
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    fn into_create(self) -> CreateArtist {
        CreateArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_venue: checkbox_checked(self.seeking_venue.as_deref()),
            seeking_description: self.seeking_description,
        }
    }

    fn into_update(self) -> UpdateArtist {
        UpdateArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_venue: checkbox_checked(self.seeking_venue.as_deref()),
            seeking_description: self.seeking_description,
        }
    }

    fn from_artist(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: Some(gigbook_core::genres::encode(&artist.genres)),
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description,
        }
    }
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<ArtistsResponse>> {
    let artists = state.db.list_artists().await?;
    Ok(Json(ArtistsResponse { artists }))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults<Artist>>> {
    let results = state.db.search_artists(&form.search_term).await?;
    Ok(Json(results))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    Path(artist_id): Path<ArtistId>,
    State(state): State<AppState>,
) -> Result<Json<ArtistDetail>> {
    let artist = state.db.get_artist(artist_id).await?;
    let partition = state.db.artist_shows(artist_id, Utc::now()).await?;

    Ok(Json(ArtistDetail {
        artist,
        upcoming_shows: partition.upcoming,
        upcoming_shows_count: partition.upcoming_count,
        past_shows: partition.past,
        past_shows_count: partition.past_count,
    }))
}

/// GET /artists/create
pub async fn create_artist_form() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect> {
    let artist = state.db.create_artist(form.into_create()).await?;
    tracing::info!("Artist {} was successfully listed", artist.name);

    Ok(Redirect::to("/"))
}

/// GET /artists/:artist_id/delete
pub async fn delete_artist(
    Path(artist_id): Path<ArtistId>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    state.db.delete_artist(artist_id).await?;

    Ok(Redirect::to("/artists"))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    Path(artist_id): Path<ArtistId>,
    State(state): State<AppState>,
) -> Result<Json<ArtistForm>> {
    let artist = state.db.get_artist(artist_id).await?;

    Ok(Json(ArtistForm::from_artist(artist)))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    Path(artist_id): Path<ArtistId>,
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect> {
    state.db.update_artist(artist_id, form.into_update()).await?;

    Ok(Redirect::to(&format!("/artists/{artist_id}")))
}
