//! Detail-page and show-listing view models

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, Venue};
use serde::Serialize;

/// A show as seen from one side of the booking
///
/// On a venue page the counterpart is the artist; on an artist page it is
/// the venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowEntry {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: NaiveDateTime,
    pub formatted_start_time: String,
}

/// Venue page data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows: Vec<ShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist page data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows: Vec<ShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One row of the show listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
    pub formatted_start_time: String,
}
