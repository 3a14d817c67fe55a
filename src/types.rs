//! Typed records returned by the cafe API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-submitted review of a cafe.
///
/// Only `overall` is mandatory; each sub-rating may be absent independently.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingRecord {
    pub id: Uuid,
    #[serde(rename = "rating_overall")]
    pub overall: f64,
    #[serde(rename = "rating_wifi", default)]
    pub wifi: Option<f64>,
    #[serde(rename = "rating_power", default)]
    pub power: Option<f64>,
    #[serde(rename = "rating_noise", default)]
    pub noise: Option<f64>,
    #[serde(rename = "rating_coffee", default)]
    pub coffee: Option<f64>,
    #[serde(rename = "text", default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    /// Present on the current user's own review listing
    #[serde(default)]
    pub cafe_slug: Option<String>,
    #[serde(default)]
    pub cafe_name: Option<String>,
}

impl RatingRecord {
    /// Build a record carrying only ratings, the rest defaulted
    pub fn with_ratings(overall: f64, wifi: Option<f64>, power: Option<f64>, noise: Option<f64>, coffee: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            overall,
            wifi,
            power,
            noise,
            coffee,
            body: String::new(),
            created_at: Utc::now(),
            updated_at: None,
            language: None,
            photos: Vec::new(),
            author_name: None,
            author_avatar_url: None,
            is_verified: false,
            cafe_slug: None,
            cafe_name: None,
        }
    }
}

/// Per-dimension averages over a collection of [`RatingRecord`]s.
///
/// Every field is rounded to one decimal; a dimension nobody rated is `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingSummary {
    pub overall: f64,
    pub wifi: f64,
    pub power: f64,
    pub noise: f64,
    pub coffee: f64,
}

/// Number of records contributing to each dimension of a summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DimensionCoverage {
    pub overall: usize,
    pub wifi: usize,
    pub power: usize,
    pub noise: usize,
    pub coffee: usize,
}

/// A city or region hosting cafes. `name` is already localized by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub cafe_count: u32,
    #[serde(default)]
    pub is_featured: bool,
}

/// Compact cafe representation embedded in favorites
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CafeCard {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub rating_count: u32,
}

/// A cafe the current user has favorited
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Favorite {
    pub id: Uuid,
    pub cafe: CafeCard,
    pub created_at: DateTime<Utc>,
}

/// Paginated list envelope used by the API's list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// List endpoints answer either with a page envelope or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Page(Page<T>),
    Items(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page(page) => page.results,
            Self::Items(items) => items,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
