use crate::{areas, artists, shows, venues};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gigbook_core::{error::Result, listings::Listings, types::*, GigError};
use sqlx::SqlitePool;

/// SQLite-backed listings store
pub struct SqliteListings {
    pool: SqlitePool,
}

impl SqliteListings {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Listings for SqliteListings {
    // Listing & search

    async fn list_recent_venues(&self, limit: i64) -> Result<Vec<Venue>> {
        venues::get_recent(&self.pool, limit).await
    }

    async fn list_recent_artists(&self, limit: i64) -> Result<Vec<Artist>> {
        artists::get_recent(&self.pool, limit).await
    }

    async fn search_venues(&self, term: &str) -> Result<SearchResults<Venue>> {
        Ok(SearchResults::new(venues::search(&self.pool, term).await?))
    }

    async fn search_artists(&self, term: &str) -> Result<SearchResults<Artist>> {
        Ok(SearchResults::new(artists::search(&self.pool, term).await?))
    }

    async fn venues_by_area(&self) -> Result<Vec<AreaVenues>> {
        let mut listing = Vec::new();
        for area in areas::get_all(&self.pool).await? {
            let venues = venues::get_by_area(&self.pool, area.id).await?;
            listing.push(AreaVenues { area, venues });
        }
        Ok(listing)
    }

    async fn list_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all(&self.pool).await
    }

    async fn list_shows(&self) -> Result<Vec<Show>> {
        shows::get_all(&self.pool).await
    }

    // Detail

    async fn get_venue(&self, id: VenueId) -> Result<Venue> {
        venues::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| GigError::not_found("Venue", id))
    }

    async fn get_area(&self, id: AreaId) -> Result<Area> {
        areas::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| GigError::not_found("Area", id))
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        artists::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| GigError::not_found("Artist", id))
    }

    async fn venue_shows(&self, id: VenueId, as_of: DateTime<Utc>) -> Result<ShowPartition> {
        shows::partition_by_venue(&self.pool, id, as_of).await
    }

    async fn artist_shows(&self, id: ArtistId, as_of: DateTime<Utc>) -> Result<ShowPartition> {
        shows::partition_by_artist(&self.pool, id, as_of).await
    }

    // Mutations

    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue> {
        venues::create(&self.pool, venue).await
    }

    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
        venues::update(&self.pool, id, venue).await
    }

    async fn delete_venue(&self, id: VenueId) -> Result<()> {
        venues::delete(&self.pool, id).await
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        artists::create(&self.pool, artist).await
    }

    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
        artists::update(&self.pool, id, artist).await
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<()> {
        artists::delete(&self.pool, id).await
    }

    async fn create_show(&self, show: CreateShow) -> Result<Show> {
        shows::create(&self.pool, show).await
    }
}
