use gigbook_core::{error::Result, types::*, GigError};
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

fn from_row(row: &SqliteRow) -> Area {
    Area {
        id: row.get("id"),
        city: row.get("city"),
        state: row.get("state"),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Area>> {
    let rows = sqlx::query("SELECT id, city, state FROM areas ORDER BY state")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: AreaId) -> Result<Option<Area>> {
    let row = sqlx::query("SELECT id, city, state FROM areas WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| from_row(&row)))
}

/// Resolve a (city, state) pair to its area row, inserting it if absent.
///
/// The insert-or-ignore against the UNIQUE (city, state) constraint makes
/// this atomic: two concurrent callers with the same new city end up with
/// the same single row. Runs on a connection so callers can put it inside
/// a larger transaction.
pub async fn get_or_create(conn: &mut SqliteConnection, city: &str, state: &str) -> Result<Area> {
    sqlx::query("INSERT OR IGNORE INTO areas (city, state) VALUES (?, ?)")
        .bind(city)
        .bind(state)
        .execute(&mut *conn)
        .await?;

    let row = sqlx::query("SELECT id, city, state FROM areas WHERE city = ? AND state = ?")
        .bind(city)
        .bind(state)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| GigError::database("Failed to retrieve upserted area"))?;

    Ok(from_row(&row))
}
