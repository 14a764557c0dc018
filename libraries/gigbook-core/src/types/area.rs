//! Area types

use serde::{Deserialize, Serialize};

use crate::types::Venue;

pub type AreaId = i64;

/// A (city, state) grouping that venues belong to.
///
/// At most one row exists per (city, state) pair, enforced by a unique
/// constraint in the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub city: String,
    pub state: String,
}

/// An area together with the venues located in it, for the venues
/// overview listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaVenues {
    pub area: Area,
    pub venues: Vec<Venue>,
}
