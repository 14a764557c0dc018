//! Gigbook Core
//!
//! Domain types, error handling, and the storage trait for Gigbook.
//!
//! This crate defines:
//! - **Domain Types**: `Area`, `Venue`, `Artist`, `Show`, and their
//!   create/update payloads
//! - **Genre Codec**: the delimited-string genre encoding shared by
//!   venues and artists
//! - **Storage Trait**: [`Listings`], the data-access surface the
//!   server is written against
//! - **Error Handling**: unified [`GigError`] and [`Result`] types

#![forbid(unsafe_code)]

pub mod error;
pub mod genres;
pub mod listings;
pub mod types;

// Re-export commonly used types
pub use error::{GigError, Result};
pub use listings::Listings;

// Export all types
pub use types::{
    Area, AreaId, AreaVenues,
    Artist, ArtistId, CreateArtist, UpdateArtist,
    CreateShow, Show, ShowId, ShowPartition,
    CreateVenue, UpdateVenue, Venue, VenueId,
    SearchResults,
};
