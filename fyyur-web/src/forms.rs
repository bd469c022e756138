//! Form payloads for venue, artist and show submissions
//!
//! Each payload is decoded from `application/x-www-form-urlencoded` with
//! every field optional, then validated into the matching insert struct.
//! The raw payload is kept so a rejected form can be re-rendered with what
//! the user typed.

use fyyur_common::db::{normalize_genres, Artist, NewArtist, NewShow, NewVenue, Venue};
use fyyur_common::phone::validate_phone;
use fyyur_common::time::parse_start_time;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("{field} must be a number, got '{value}'")]
    InvalidId { field: &'static str, value: String },

    #[error("Invalid start time '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidStartTime(String),

    #[error("{field} must be an http or https URL, got '{value}'")]
    InvalidLink { field: &'static str, value: String },
}

impl From<FormError> for fyyur_common::Error {
    fn from(err: FormError) -> Self {
        fyyur_common::Error::Validation(err.to_string())
    }
}

/// Venue create/edit form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    /// Checkbox; absent when unticked
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<NewVenue, FormError> {
        Ok(NewVenue {
            name: required("Name", &self.name)?,
            city: required("City", &self.city)?,
            state: required("State", &self.state)?,
            address: required("Address", &self.address)?,
            phone: phone(&self.phone)?,
            genres: normalize_genres(&self.genres),
            image_link: link("Image link", &self.image_link)?,
            facebook_link: link("Facebook link", &self.facebook_link)?,
            website: link("Website", &self.website)?,
            seeking_talent: checkbox(self.seeking_talent.as_deref()),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genre_list().join(", "),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Artist create/edit form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<NewArtist, FormError> {
        Ok(NewArtist {
            name: required("Name", &self.name)?,
            city: required("City", &self.city)?,
            state: required("State", &self.state)?,
            phone: phone(&self.phone)?,
            genres: normalize_genres(&self.genres),
            image_link: link("Image link", &self.image_link)?,
            facebook_link: link("Facebook link", &self.facebook_link)?,
            website: link("Website", &self.website)?,
            seeking_venue: checkbox(self.seeking_venue.as_deref()),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genre_list().join(", "),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Show booking form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(&self) -> Result<NewShow, FormError> {
        let artist_id = id("Artist ID", &self.artist_id)?;
        let venue_id = id("Venue ID", &self.venue_id)?;
        let start = required("Start time", &self.start_time)?;
        let start_time =
            parse_start_time(&start).map_err(|_| FormError::InvalidStartTime(start.clone()))?;

        Ok(NewShow {
            start_time,
            venue_id,
            artist_id,
        })
    }
}

/// Search box submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn phone(value: &str) -> Result<Option<String>, FormError> {
    match optional(value) {
        None => Ok(None),
        Some(raw) => validate_phone(&raw)
            .map(Some)
            .map_err(|_| FormError::InvalidPhone(raw)),
    }
}

fn link(field: &'static str, value: &str) -> Result<Option<String>, FormError> {
    match optional(value) {
        Some(raw) if !is_web_url(&raw) => Err(FormError::InvalidLink { field, value: raw }),
        other => Ok(other),
    }
}

/// True for absolute `http`/`https` URLs, the only links pages will render
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn id(field: &'static str, value: &str) -> Result<i64, FormError> {
    let raw = required(field, value)?;
    raw.parse().map_err(|_| FormError::InvalidId { field, value: raw })
}

/// HTML checkbox semantics: any of `y`, `on`, `true`, `1` means ticked
fn checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("y" | "yes" | "on" | "true" | "1")
    )
}
