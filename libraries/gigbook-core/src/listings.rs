//! Storage trait for the listings data layer

use crate::error::Result;
use crate::types::{
    Area, AreaId, AreaVenues, Artist, ArtistId, CreateArtist, CreateShow, CreateVenue,
    SearchResults, Show, ShowPartition, UpdateArtist, UpdateVenue, Venue, VenueId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Data-access surface for venue, artist, and show listings
///
/// The server is written against this trait so the SQLite-backed store
/// is an explicit handle passed into handlers rather than shared global
/// state.
#[async_trait]
pub trait Listings: Send + Sync {
    // ========================================================================
    // Listing & search
    // ========================================================================

    /// The `limit` highest-id venues, descending by id
    async fn list_recent_venues(&self, limit: i64) -> Result<Vec<Venue>>;

    /// The `limit` highest-id artists, descending by id
    async fn list_recent_artists(&self, limit: i64) -> Result<Vec<Artist>>;

    /// Case-insensitive substring match on venue name; empty term
    /// matches everything
    async fn search_venues(&self, term: &str) -> Result<SearchResults<Venue>>;

    /// Case-insensitive substring match on artist name
    async fn search_artists(&self, term: &str) -> Result<SearchResults<Artist>>;

    /// All areas ordered by state, each with its venues
    async fn venues_by_area(&self) -> Result<Vec<AreaVenues>>;

    /// All artists ordered by id
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    /// All shows ordered by venue id
    async fn list_shows(&self) -> Result<Vec<Show>>;

    // ========================================================================
    // Detail
    // ========================================================================

    /// Load one venue by primary key, `NotFound` when absent
    async fn get_venue(&self, id: VenueId) -> Result<Venue>;

    /// Load one area by primary key, `NotFound` when absent
    async fn get_area(&self, id: AreaId) -> Result<Area>;

    /// Load one artist by primary key, `NotFound` when absent
    async fn get_artist(&self, id: ArtistId) -> Result<Artist>;

    /// Split a venue's shows into upcoming (after `as_of`) and past
    /// (before `as_of`); a show starting exactly at `as_of` is in
    /// neither
    async fn venue_shows(&self, id: VenueId, as_of: DateTime<Utc>) -> Result<ShowPartition>;

    /// Split an artist's shows around `as_of`
    async fn artist_shows(&self, id: ArtistId, as_of: DateTime<Utc>) -> Result<ShowPartition>;

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a venue, resolving its (city, state) to an area row in
    /// the same transaction
    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue>;

    /// Overwrite every mutable venue field, re-resolving the area
    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue>;

    /// Delete a venue and every show referencing it
    async fn delete_venue(&self, id: VenueId) -> Result<()>;

    /// Create an artist
    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist>;

    /// Overwrite every mutable artist field
    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist>;

    /// Delete an artist and every show referencing it
    async fn delete_artist(&self, id: ArtistId) -> Result<()>;

    /// Create a show, snapshotting artist/venue name and image
    async fn create_show(&self, show: CreateShow) -> Result<Show>;
}
