//! Show types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ArtistId, VenueId};

pub type ShowId = i64;

/// A scheduled show linking an artist to a venue.
///
/// `artist_name`, `artist_image_link`, `venue_name`, and
/// `venue_image_link` are snapshots taken when the show is created and
/// are never refreshed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Data for creating a new show
///
/// Only the ids and start time are submitted; the artist/venue snapshot
/// columns are filled in by the storage layer from the referenced rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// Shows split around a comparison instant.
///
/// A show starting exactly at the instant lands in neither list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowPartition {
    pub upcoming: Vec<Show>,
    pub upcoming_count: usize,
    pub past: Vec<Show>,
    pub past_count: usize,
}
