//! View models assembled from query results

pub mod detail;
pub mod listing;

pub use detail::{ArtistDetail, ShowEntry, ShowListing, VenueDetail};
pub use listing::{EntitySummary, SearchResults, VenueArea};
