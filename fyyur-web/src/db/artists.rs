//! Artist database operations

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, NewArtist};
use fyyur_common::{Error, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{filter_by_name, BookedShow};
use crate::models::EntitySummary;

/// All artists with their count of shows starting after `now`, by name
pub async fn list_artists(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<EntitySummary>> {
    let rows = sqlx::query_as::<_, EntitySummary>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
        GROUP BY a.id
        ORDER BY a.name, a.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Artists whose name contains `term` (case-insensitive)
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<EntitySummary>> {
    let rows = sqlx::query_as::<_, EntitySummary>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
        GROUP BY a.id
        ORDER BY a.name, a.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(filter_by_name(rows, term))
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, artist_id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(
        r#"
        SELECT id, name, city, state, phone, genres, image_link,
               facebook_link, website, seeking_venue, seeking_description
        FROM artists
        WHERE id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

/// Shows an artist plays, joined to their venues, oldest first
pub async fn list_artist_shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<BookedShow>> {
    let shows = sqlx::query_as::<_, BookedShow>(
        r#"
        SELECT s.id AS show_id, s.start_time,
               v.id AS counterpart_id, v.name AS counterpart_name,
               v.image_link AS counterpart_image_link
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert an artist, returning its id
pub async fn create_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let artist_id = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link,
            facebook_link, website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    tracing::info!(artist_id, name = %artist.name, "Artist created");
    Ok(artist_id)
}

/// Replace every editable field of an existing artist
pub async fn update_artist(pool: &SqlitePool, artist_id: i64, artist: &NewArtist) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            facebook_link = ?, website = ?, seeking_venue = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Artist {}", artist_id)));
    }

    tx.commit().await?;

    tracing::info!(artist_id, name = %artist.name, "Artist updated");
    Ok(())
}

/// Check an artist exists inside an open transaction
pub async fn artist_exists(tx: &mut Transaction<'_, Sqlite>, artist_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(artist_id)
        .fetch_one(&mut **tx)
        .await?;

    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{artist_named, at};

    #[tokio::test]
    async fn test_create_and_load_artist() {
        let pool = fyyur_common::db::init_memory_database().await.unwrap();

        let id = create_artist(&pool, &artist_named("Guns N Petals")).await.unwrap();
        let loaded = get_artist(&pool, id).await.unwrap().expect("Artist not found");

        assert_eq!(loaded.name, "Guns N Petals");
        assert!(loaded.seeking_venue);
        assert_eq!(loaded.genre_list(), vec!["Rock n Roll"]);
    }

    #[tokio::test]
    async fn test_list_artists_sorted_by_name() {
        let pool = fyyur_common::db::init_memory_database().await.unwrap();
        for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
            create_artist(&pool, &artist_named(name)).await.unwrap();
        }

        let names: Vec<String> = list_artists(&pool, at("2025-01-01 00:00:00"))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn test_search_artists() {
        let pool = fyyur_common::db::init_memory_database().await.unwrap();
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            create_artist(&pool, &artist_named(name)).await.unwrap();
        }

        let hits = search_artists(&pool, "A", at("2025-01-01 00:00:00")).await.unwrap();
        assert_eq!(hits.len(), 3);

        let hits = search_artists(&pool, "band", at("2025-01-01 00:00:00")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Wild Sax Band");
    }

    #[tokio::test]
    async fn test_search_artists_non_ascii() {
        let pool = fyyur_common::db::init_memory_database().await.unwrap();
        for name in ["ÅSA ÖBERG", "Asa Oberg"] {
            create_artist(&pool, &artist_named(name)).await.unwrap();
        }

        let hits = search_artists(&pool, "åsa", at("2025-01-01 00:00:00")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ÅSA ÖBERG");
    }

    #[tokio::test]
    async fn test_update_missing_artist_is_not_found() {
        let pool = fyyur_common::db::init_memory_database().await.unwrap();
        let result = update_artist(&pool, 9, &artist_named("Nobody")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
