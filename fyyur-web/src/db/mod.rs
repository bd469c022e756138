//! Database queries for fyyur-web
//!
//! Reads take the pool; every write opens one transaction, commits on
//! success and rolls back by dropping the transaction on any error.

pub mod artists;
pub mod shows;
pub mod venues;

use chrono::NaiveDateTime;

use crate::models::EntitySummary;

/// A show joined to the record on the other side of the booking
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BookedShow {
    pub show_id: i64,
    pub start_time: NaiveDateTime,
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
}

/// Venue row with its location and upcoming-show count
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct VenueListingRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Keep rows whose name contains `term`, ignoring case
///
/// Folding happens here rather than in SQL: SQLite's `lower()` only folds
/// ASCII. The term is matched as typed, whitespace included.
pub(crate) fn filter_by_name(rows: Vec<EntitySummary>, term: &str) -> Vec<EntitySummary> {
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| row.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDateTime;
    use fyyur_common::db::{NewArtist, NewVenue};
    use sqlx::SqlitePool;

    pub fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    pub fn the_hop() -> NewVenue {
        NewVenue {
            name: "The Hop".to_string(),
            city: "SF".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("415-555-0100".to_string()),
            genres: "Jazz,Swing".to_string(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local jazz acts".to_string()),
        }
    }

    pub fn artist_named(name: &str) -> NewArtist {
        NewArtist {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-555-5000".to_string()),
            genres: "Rock n Roll".to_string(),
            image_link: Some("https://example.com/artist.jpg".to_string()),
            facebook_link: None,
            website: None,
            seeking_venue: true,
            seeking_description: None,
        }
    }

    pub async fn seed_artist(pool: &SqlitePool, name: &str) -> i64 {
        crate::db::artists::create_artist(pool, &artist_named(name))
            .await
            .unwrap()
    }
}
