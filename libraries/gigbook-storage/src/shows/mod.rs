use crate::{artists, venues};
use chrono::{DateTime, Utc};
use gigbook_core::{error::Result, types::*, GigError};
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, artist_id, artist_name, artist_image_link, venue_id, venue_name, \
                       venue_image_link, start_time";

fn from_row(row: &SqliteRow) -> Result<Show> {
    Ok(Show {
        id: row.get("id"),
        artist_id: row.get("artist_id"),
        artist_name: row.get("artist_name"),
        artist_image_link: row.get("artist_image_link"),
        venue_id: row.get("venue_id"),
        venue_name: row.get("venue_name"),
        venue_image_link: row.get("venue_image_link"),
        start_time: DateTime::from_timestamp(row.get::<i64, _>("start_time"), 0)
            .ok_or_else(|| GigError::database("Invalid timestamp"))?,
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM shows ORDER BY venue_id"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: ShowId) -> Result<Option<Show>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM shows WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Split a venue's shows around `as_of`: strictly later shows are
/// upcoming, strictly earlier are past. A show starting exactly at
/// `as_of` lands in neither list.
pub async fn partition_by_venue(
    pool: &SqlitePool,
    venue_id: VenueId,
    as_of: DateTime<Utc>,
) -> Result<ShowPartition> {
    partition(pool, "venue_id", venue_id, as_of).await
}

/// Split an artist's shows around `as_of`, same boundary rule.
pub async fn partition_by_artist(
    pool: &SqlitePool,
    artist_id: ArtistId,
    as_of: DateTime<Utc>,
) -> Result<ShowPartition> {
    partition(pool, "artist_id", artist_id, as_of).await
}

async fn partition(
    pool: &SqlitePool,
    fk_column: &str,
    fk: i64,
    as_of: DateTime<Utc>,
) -> Result<ShowPartition> {
    let instant = as_of.timestamp();

    let upcoming_rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM shows WHERE {fk_column} = ? AND start_time > ? \
         ORDER BY start_time"
    ))
    .bind(fk)
    .bind(instant)
    .fetch_all(pool)
    .await?;

    let past_rows = sqlx::query(&format!(
        "SELECT {COLUMNS} FROM shows WHERE {fk_column} = ? AND start_time < ? \
         ORDER BY start_time"
    ))
    .bind(fk)
    .bind(instant)
    .fetch_all(pool)
    .await?;

    let upcoming: Vec<Show> = upcoming_rows.iter().map(from_row).collect::<Result<_>>()?;
    let past: Vec<Show> = past_rows.iter().map(from_row).collect::<Result<_>>()?;

    Ok(ShowPartition {
        upcoming_count: upcoming.len(),
        upcoming,
        past_count: past.len(),
        past,
    })
}

/// Create a show. The referenced artist and venue must exist; their
/// name and image are copied into the show row as a snapshot.
pub async fn create(pool: &SqlitePool, show: CreateShow) -> Result<Show> {
    let artist = artists::get_by_id(pool, show.artist_id)
        .await?
        .ok_or_else(|| GigError::not_found("Artist", show.artist_id))?;

    let venue = venues::get_by_id(pool, show.venue_id)
        .await?
        .ok_or_else(|| GigError::not_found("Venue", show.venue_id))?;

    let result = sqlx::query(
        "INSERT INTO shows (artist_id, artist_name, artist_image_link, venue_id, venue_name, \
         venue_image_link, start_time)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(artist.id)
    .bind(&artist.name)
    .bind(&artist.image_link)
    .bind(venue.id)
    .bind(&venue.name)
    .bind(&venue.image_link)
    .bind(show.start_time.timestamp())
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve created show"))
}

/// Remove every show referencing a venue. Runs on a connection so the
/// venue delete can include it in its transaction.
pub async fn delete_by_venue(conn: &mut SqliteConnection, venue_id: VenueId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(venue_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

/// Remove every show referencing an artist.
pub async fn delete_by_artist(conn: &mut SqliteConnection, artist_id: ArtistId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(artist_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
