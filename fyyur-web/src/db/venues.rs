//! Venue database operations

use chrono::NaiveDateTime;
use fyyur_common::db::{NewVenue, Venue};
use fyyur_common::{Error, Result};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{filter_by_name, BookedShow, VenueListingRow};
use crate::models::EntitySummary;

/// All venues with location and count of shows starting after `now`
///
/// Ordered by (state, city, id) so rows of one area are adjacent.
pub async fn list_venues_with_upcoming(
    pool: &SqlitePool,
    now: NaiveDateTime,
) -> Result<Vec<VenueListingRow>> {
    let rows = sqlx::query_as::<_, VenueListingRow>(
        r#"
        SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        GROUP BY v.id
        ORDER BY v.state, v.city, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Venues whose name contains `term` (case-insensitive)
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<EntitySummary>> {
    let rows = sqlx::query_as::<_, EntitySummary>(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        GROUP BY v.id
        ORDER BY v.name, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(filter_by_name(rows, term))
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, venue_id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>(
        r#"
        SELECT id, name, city, state, address, phone, genres, image_link,
               facebook_link, website, seeking_talent, seeking_description
        FROM venues
        WHERE id = ?
        "#,
    )
    .bind(venue_id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

/// Shows booked at a venue, joined to their artists, oldest first
pub async fn list_venue_shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<BookedShow>> {
    let shows = sqlx::query_as::<_, BookedShow>(
        r#"
        SELECT s.id AS show_id, s.start_time,
               a.id AS counterpart_id, a.name AS counterpart_name,
               a.image_link AS counterpart_image_link
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert a venue, returning its id
pub async fn create_venue(pool: &SqlitePool, venue: &NewVenue) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let venue_id = insert_venue(&mut tx, venue).await?;
    tx.commit().await?;

    tracing::info!(venue_id, name = %venue.name, "Venue created");
    Ok(venue_id)
}

/// Replace every editable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, venue_id: i64, venue: &NewVenue) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website = ?, seeking_talent = ?,
            seeking_description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(venue_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Venue {}", venue_id)));
    }

    tx.commit().await?;

    tracing::info!(venue_id, name = %venue.name, "Venue updated");
    Ok(())
}

/// Delete a venue together with its shows
///
/// Shows are removed explicitly as well as by the `ON DELETE CASCADE`
/// key, so databases created before the cascade existed behave the same.
/// Returns the deleted venue's name.
pub async fn delete_venue(pool: &SqlitePool, venue_id: i64) -> Result<String> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(venue_id)
        .fetch_optional(&mut *tx)
        .await?;
    let name = name.ok_or_else(|| Error::NotFound(format!("Venue {}", venue_id)))?;

    let shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(venue_id, shows_removed = shows, "Venue deleted");
    Ok(name)
}

/// Insert a venue inside an open transaction
pub async fn insert_venue(tx: &mut Transaction<'_, Sqlite>, venue: &NewVenue) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres, image_link,
            facebook_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(&mut **tx)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Check a venue exists inside an open transaction
pub async fn venue_exists(tx: &mut Transaction<'_, Sqlite>, venue_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(venue_id)
        .fetch_one(&mut **tx)
        .await?;

    Ok(exists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::shows::create_show;
    use crate::db::test_support::{at, seed_artist, the_hop};
    use fyyur_common::db::init_memory_database;
    use fyyur_common::db::NewShow;

    #[tokio::test]
    async fn test_create_and_load_venue() {
        let pool = init_memory_database().await.unwrap();

        let id = create_venue(&pool, &the_hop()).await.unwrap();
        let loaded = get_venue(&pool, id).await.unwrap().expect("Venue not found");

        assert_eq!(loaded.name, "The Hop");
        assert_eq!(loaded.city, "SF");
        assert!(loaded.seeking_talent);
        assert_eq!(loaded.phone.as_deref(), Some("415-555-0100"));
    }

    #[tokio::test]
    async fn test_get_missing_venue_is_none() {
        let pool = init_memory_database().await.unwrap();
        assert!(get_venue(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upcoming_count_is_strictly_after_now() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = create_venue(&pool, &the_hop()).await.unwrap();
        let artist_id = seed_artist(&pool, "Guns N Petals").await;

        for start in ["2030-01-01 20:00:00", "2030-01-02 20:00:00", "2020-01-01 20:00:00", "2025-06-01 12:00:00"] {
            create_show(
                &pool,
                &NewShow {
                    start_time: at(start),
                    venue_id,
                    artist_id,
                },
            )
            .await
            .unwrap();
        }

        // The show starting exactly at `now` is not upcoming for the listing
        let rows = list_venues_with_upcoming(&pool, at("2025-06-01 12:00:00"))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].num_upcoming_shows, 2);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let pool = init_memory_database().await.unwrap();
        create_venue(&pool, &the_hop()).await.unwrap();
        let mut other = the_hop();
        other.name = "Park Square Live Music & Coffee".to_string();
        create_venue(&pool, &other).await.unwrap();

        let now = at("2025-01-01 00:00:00");
        let hits = search_venues(&pool, "HoP", now).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Hop");

        let all = search_venues(&pool, "", now).await.unwrap();
        assert_eq!(all.len(), 2);

        let none = search_venues(&pool, "zzz", now).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_names() {
        let pool = init_memory_database().await.unwrap();
        let mut cafe = the_hop();
        cafe.name = "CAFÉ ÜBER".to_string();
        create_venue(&pool, &cafe).await.unwrap();

        let now = at("2025-01-01 00:00:00");
        for term in ["café", "über", "Café Ü", "É"] {
            let hits = search_venues(&pool, term, now).await.unwrap();
            assert_eq!(hits.len(), 1, "{} should match", term);
            assert_eq!(hits[0].name, "CAFÉ ÜBER");
        }
    }

    #[tokio::test]
    async fn test_search_term_is_not_trimmed() {
        let pool = init_memory_database().await.unwrap();
        let mut joined = the_hop();
        joined.name = "TheHop".to_string();
        create_venue(&pool, &joined).await.unwrap();
        let mut scotch = the_hop();
        scotch.name = "Hopscotch".to_string();
        create_venue(&pool, &scotch).await.unwrap();
        create_venue(&pool, &the_hop()).await.unwrap();

        let now = at("2025-01-01 00:00:00");
        let names = |hits: Vec<EntitySummary>| hits.into_iter().map(|h| h.name).collect::<Vec<_>>();

        // Only names that actually contain a space
        assert_eq!(names(search_venues(&pool, " ", now).await.unwrap()), vec!["The Hop"]);
        assert_eq!(names(search_venues(&pool, " hop", now).await.unwrap()), vec!["The Hop"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_venue_and_shows() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = create_venue(&pool, &the_hop()).await.unwrap();
        let artist_id = seed_artist(&pool, "Guns N Petals").await;
        create_show(
            &pool,
            &NewShow {
                start_time: at("2035-04-08 20:00:00"),
                venue_id,
                artist_id,
            },
        )
        .await
        .unwrap();

        // Shows are deleted first; the venue delete then aborts
        sqlx::query(
            "CREATE TRIGGER lock_venues BEFORE DELETE ON venues \
             BEGIN SELECT RAISE(ABORT, 'venues are locked'); END",
        )
        .execute(&pool)
        .await
        .unwrap();

        let result = delete_venue(&pool, venue_id).await;
        assert!(matches!(result, Err(Error::Database(_))));

        let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE venue_id = ?")
            .bind(venue_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(shows, 1);
        assert!(get_venue(&pool, venue_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_missing_venue_is_not_found() {
        let pool = init_memory_database().await.unwrap();
        let result = update_venue(&pool, 7, &the_hop()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_venue_replaces_fields() {
        let pool = init_memory_database().await.unwrap();
        let id = create_venue(&pool, &the_hop()).await.unwrap();

        let mut edited = the_hop();
        edited.name = "The Musical Hop".to_string();
        edited.seeking_talent = false;
        edited.seeking_description = None;
        update_venue(&pool, id, &edited).await.unwrap();

        let loaded = get_venue(&pool, id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "The Musical Hop");
        assert!(!loaded.seeking_talent);
    }

    #[tokio::test]
    async fn test_delete_venue_removes_shows() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = create_venue(&pool, &the_hop()).await.unwrap();
        let artist_id = seed_artist(&pool, "The Wild Sax Band").await;
        create_show(
            &pool,
            &NewShow {
                start_time: at("2035-04-01 20:00:00"),
                venue_id,
                artist_id,
            },
        )
        .await
        .unwrap();

        let name = delete_venue(&pool, venue_id).await.unwrap();

        assert_eq!(name, "The Hop");
        assert!(get_venue(&pool, venue_id).await.unwrap().is_none());
        let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(shows, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_venue_is_not_found() {
        let pool = init_memory_database().await.unwrap();
        assert!(matches!(delete_venue(&pool, 3).await, Err(Error::NotFound(_))));
    }
}
