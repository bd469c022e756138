//! Database models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bookable venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    /// Comma-delimited genre list
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn genre_list(&self) -> Vec<&str> {
        split_genres(&self.genres)
    }
}

/// A performing artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    /// Comma-delimited genre list
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn genre_list(&self) -> Vec<&str> {
        split_genres(&self.genres)
    }
}

/// A scheduled performance joining one venue and one artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub artist_id: i64,
}

/// Validated venue fields, used for both insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Validated artist fields, used for both insert and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Validated show fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub start_time: NaiveDateTime,
    pub venue_id: i64,
    pub artist_id: i64,
}

/// Split a stored genre string into its non-empty, trimmed entries
pub fn split_genres(genres: &str) -> Vec<&str> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect()
}

/// Normalize user-entered genres into the stored comma-delimited form
///
/// Entries are trimmed, empties dropped and duplicates (case-insensitive)
/// removed while keeping first-seen order.
pub fn normalize_genres(raw: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();

    for genre in split_genres(raw) {
        let key = genre.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            kept.push(genre);
        }
    }

    kept.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_genres_skips_blanks() {
        assert_eq!(split_genres("Jazz, Reggae,,  Swing "), vec!["Jazz", "Reggae", "Swing"]);
        assert!(split_genres("").is_empty());
    }

    #[test]
    fn test_normalize_genres_dedupes_case_insensitively() {
        assert_eq!(normalize_genres(" Jazz ,jazz, Folk,"), "Jazz,Folk");
    }
}
