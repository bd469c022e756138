//! Query aggregation: grouping, partitioning and view assembly

pub mod listing;

pub use listing::{
    build_artist_detail, build_show_listings, build_venue_detail, group_by_area,
    partition_shows,
};
