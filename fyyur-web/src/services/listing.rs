//! Venue grouping and past/upcoming show partitioning
//!
//! Pure functions over query rows. "Now" is always passed in so a single
//! request sees one consistent instant.

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, Venue};
use fyyur_common::time::{format_show_time, ShowTimeFormat};

use crate::db::shows::ShowListingRow;
use crate::db::{BookedShow, VenueListingRow};
use crate::models::{ArtistDetail, EntitySummary, ShowEntry, ShowListing, VenueArea, VenueDetail};

/// Group venues into one area per distinct (city, state) pair
///
/// Areas keep the order in which their first venue appears; venues keep
/// their input order within an area.
pub fn group_by_area(rows: Vec<VenueListingRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for row in rows {
        let summary = EntitySummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };

        match areas
            .iter_mut()
            .find(|area| area.city == row.city && area.state == row.state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

/// Split shows into (past, upcoming)
///
/// Past: start strictly before `now`. Upcoming: start at or after `now`.
pub fn partition_shows(
    shows: Vec<BookedShow>,
    now: NaiveDateTime,
) -> (Vec<ShowEntry>, Vec<ShowEntry>) {
    let (past, upcoming): (Vec<BookedShow>, Vec<BookedShow>) =
        shows.into_iter().partition(|show| show.start_time < now);

    (
        past.into_iter().map(show_entry).collect(),
        upcoming.into_iter().map(show_entry).collect(),
    )
}

fn show_entry(show: BookedShow) -> ShowEntry {
    ShowEntry {
        counterpart_id: show.counterpart_id,
        counterpart_name: show.counterpart_name,
        counterpart_image_link: show.counterpart_image_link,
        formatted_start_time: format_show_time(show.start_time, ShowTimeFormat::Full),
        start_time: show.start_time,
    }
}

pub fn build_venue_detail(venue: Venue, shows: Vec<BookedShow>, now: NaiveDateTime) -> VenueDetail {
    let (past_shows, upcoming_shows) = partition_shows(shows, now);
    VenueDetail {
        genres: venue.genre_list().into_iter().map(String::from).collect(),
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn build_artist_detail(
    artist: Artist,
    shows: Vec<BookedShow>,
    now: NaiveDateTime,
) -> ArtistDetail {
    let (past_shows, upcoming_shows) = partition_shows(shows, now);
    ArtistDetail {
        genres: artist.genre_list().into_iter().map(String::from).collect(),
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn build_show_listings(rows: Vec<ShowListingRow>) -> Vec<ShowListing> {
    rows.into_iter()
        .map(|row| ShowListing {
            id: row.id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            formatted_start_time: format_show_time(row.start_time, ShowTimeFormat::Medium),
            start_time: row.start_time,
        })
        .collect()
}
