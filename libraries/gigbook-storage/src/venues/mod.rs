use crate::{areas, shows};
use gigbook_core::{error::Result, genres, types::*, GigError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const COLUMNS: &str = "id, name, address, phone, genres, image_link, facebook_link, \
                       website_link, seeking_talent, seeking_description, area_id";

fn from_row(row: &SqliteRow) -> Venue {
    Venue {
        id: row.get("id"),
        name: row.get("name"),
        address: row.get("address"),
        phone: row.get("phone"),
        genres: genres::decode(&row.get::<String, _>("genres")),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website_link: row.get("website_link"),
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
        area_id: row.get("area_id"),
    }
}

/// The `limit` highest-id venues, descending by id only
pub async fn get_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM venues ORDER BY id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Case-insensitive substring match on name. An empty term matches all
/// rows.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let pattern = format!("%{}%", term);

    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM venues WHERE name LIKE ? ORDER BY id"
    ))
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM venues WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

pub async fn get_by_area(pool: &SqlitePool, area_id: AreaId) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM venues WHERE area_id = ? ORDER BY id"
    ))
    .bind(area_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Create a venue, resolving its (city, state) to an area row in the
/// same transaction.
pub async fn create(pool: &SqlitePool, venue: CreateVenue) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let area = areas::get_or_create(&mut tx, &venue.city, &venue.state).await?;

    let result = sqlx::query(
        "INSERT INTO venues (name, address, phone, genres, image_link, facebook_link, \
         website_link, seeking_talent, seeking_description, area_id)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(genres::encode(&venue.genres))
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(area.id)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve created venue"))
}

/// Overwrite every mutable field of a venue, re-resolving the area from
/// the submitted city/state.
pub async fn update(pool: &SqlitePool, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let area = areas::get_or_create(&mut tx, &venue.city, &venue.state).await?;

    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, address = ?, phone = ?, genres = ?, image_link = ?, \
         facebook_link = ?, website_link = ?, seeking_talent = ?, \
         seeking_description = ?, area_id = ?
         WHERE id = ?",
    )
    .bind(&venue.name)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(genres::encode(&venue.genres))
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(area.id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Venue", id));
    }

    tx.commit().await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve updated venue"))
}

/// Delete a venue and every show referencing it, in one transaction.
pub async fn delete(pool: &SqlitePool, id: VenueId) -> Result<()> {
    let mut tx = pool.begin().await?;

    shows::delete_by_venue(&mut tx, id).await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Venue", id));
    }

    tx.commit().await?;

    Ok(())
}
