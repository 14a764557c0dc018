pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use crate::error::ServerError;

/// Fallback for routes outside the listing surface
pub async fn fallback_not_found() -> ServerError {
    ServerError::NotFound("no such page".to_string())
}

/// The create/edit checkbox convention: the form sends the sentinel
/// `y` when checked and omits the field entirely when unchecked.
pub(crate) fn checkbox_checked(value: Option<&str>) -> bool {
    value == Some("y")
}

/// Genre multi-selects flatten to one comma-separated form field.
pub(crate) fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .filter(|genre| !genre.is_empty())
        .map(|genre| genre.to_string())
        .collect()
}
