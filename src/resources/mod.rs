//! Descriptors for every remote collection the data layer fetches

pub mod favorites;
pub mod locations;
pub mod reviews;

pub use favorites::Favorites;
pub use locations::{Locations, TrendingLocations};
pub use reviews::{CafeReviews, MyReviews};
