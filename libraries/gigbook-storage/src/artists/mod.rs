use crate::shows;
use gigbook_core::{error::Result, genres, types::*, GigError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                       website_link, seeking_venue, seeking_description";

fn from_row(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: genres::decode(&row.get::<String, _>("genres")),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website_link: row.get("website_link"),
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM artists ORDER BY id"))
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// The `limit` highest-id artists, descending by id only
pub async fn get_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM artists ORDER BY id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Case-insensitive substring match on name. An empty term matches all
/// rows.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let pattern = format!("%{}%", term);

    let rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM artists WHERE name LIKE ? ORDER BY id"
    ))
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM artists WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> Result<Artist> {
    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, \
         website_link, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(genres::encode(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve created artist"))
}

/// Overwrite every mutable field of an artist.
pub async fn update(pool: &SqlitePool, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?, \
         facebook_link = ?, website_link = ?, seeking_venue = ?, seeking_description = ?
         WHERE id = ?",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(genres::encode(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Artist", id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve updated artist"))
}

/// Delete an artist and every show referencing it, in one transaction.
pub async fn delete(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let mut tx = pool.begin().await?;

    shows::delete_by_artist(&mut tx, id).await?;

    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Artist", id));
    }

    tx.commit().await?;

    Ok(())
}
