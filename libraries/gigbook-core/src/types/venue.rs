//! Venue types

use serde::{Deserialize, Serialize};

use crate::types::AreaId;

pub type VenueId = i64;

/// A venue, belonging to exactly one area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub area_id: AreaId,
}

/// Data for creating a new venue
///
/// Carries the submitted city/state pair; the storage layer resolves it
/// to an area row (creating one if needed) in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Full-row replacement for an existing venue
///
/// Every field overwrites the stored value; the city/state pair is
/// re-resolved to an area the same way creation does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}
