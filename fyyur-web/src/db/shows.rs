//! Show database operations

use chrono::NaiveDateTime;
use fyyur_common::db::NewShow;
use fyyur_common::{Error, Result};
use sqlx::SqlitePool;

use super::artists::artist_exists;
use super::venues::venue_exists;

/// Show joined with venue and artist names
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ShowListingRow {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// An (id, name) pair for the show form's pickers
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub name: String,
}

/// Every show with its venue and artist, by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListingRow>> {
    let rows = sqlx::query_as::<_, ShowListingRow>(
        r#"
        SELECT s.id, s.start_time,
               v.id AS venue_id, v.name AS venue_name,
               a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Book a show, returning its id
///
/// Both sides of the booking must exist; a dangling reference is a
/// validation failure and nothing is written.
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let mut tx = pool.begin().await?;

    if !venue_exists(&mut tx, show.venue_id).await? {
        return Err(Error::Validation(format!("Venue {} does not exist", show.venue_id)));
    }
    if !artist_exists(&mut tx, show.artist_id).await? {
        return Err(Error::Validation(format!("Artist {} does not exist", show.artist_id)));
    }

    let show_id = sqlx::query("INSERT INTO shows (start_time, venue_id, artist_id) VALUES (?, ?, ?)")
        .bind(show.start_time)
        .bind(show.venue_id)
        .bind(show.artist_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    tracing::info!(
        show_id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        start_time = %show.start_time,
        "Show created"
    );
    Ok(show_id)
}

/// Venues available for booking, by name
pub async fn venue_choices(pool: &SqlitePool) -> Result<Vec<Choice>> {
    let rows = sqlx::query_as::<_, Choice>("SELECT id, name FROM venues ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Artists available for booking, by name
pub async fn artist_choices(pool: &SqlitePool) -> Result<Vec<Choice>> {
    let rows = sqlx::query_as::<_, Choice>("SELECT id, name FROM artists ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{at, seed_artist, the_hop};
    use crate::db::venues::create_venue;
    use fyyur_common::db::init_memory_database;

    #[tokio::test]
    async fn test_create_and_list_shows() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = create_venue(&pool, &the_hop()).await.unwrap();
        let artist_id = seed_artist(&pool, "Guns N Petals").await;

        for start in ["2035-04-08 20:00:00", "2019-05-21 21:30:00"] {
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

        let shows = list_shows(&pool).await.unwrap();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].start_time, at("2019-05-21 21:30:00"));
        assert_eq!(shows[0].venue_name, "The Hop");
        assert_eq!(shows[0].artist_name, "Guns N Petals");
    }

    #[tokio::test]
    async fn test_show_with_missing_venue_is_rejected() {
        let pool = init_memory_database().await.unwrap();
        let artist_id = seed_artist(&pool, "Guns N Petals").await;

        let result = create_show(
            &pool,
            &NewShow {
                start_time: at("2035-04-08 20:00:00"),
                venue_id: 404,
                artist_id,
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(list_shows(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_show_with_missing_artist_is_rejected() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = create_venue(&pool, &the_hop()).await.unwrap();

        let result = create_show(
            &pool,
            &NewShow {
                start_time: at("2035-04-08 20:00:00"),
                venue_id,
                artist_id: 404,
            },
        )
        .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_choices_sorted_by_name() {
        let pool = init_memory_database().await.unwrap();
        seed_artist(&pool, "Matt Quevedo").await;
        seed_artist(&pool, "Guns N Petals").await;

        let names: Vec<String> = artist_choices(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo"]);
        assert!(venue_choices(&pool).await.unwrap().is_empty());
    }
}
