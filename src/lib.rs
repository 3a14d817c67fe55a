//! cafe-data - resilient remote-data layer for the cafe discovery API
//!
//! Fetches locations, reviews and favorites, classifies failures into
//! silent / toast / inline treatments, and derives rating summaries from
//! partially-populated reviews.

// Core modules
pub mod config;
pub mod context;
pub mod error;
pub mod traits;
pub mod types;

// Transport and classification
pub mod analysis;
pub mod http;
pub mod notify;

// Main functionality modules
pub mod aggregation;
pub mod client;
pub mod controller;
pub mod resources;

pub mod testing;

// Re-export main types for convenience
pub use aggregation::{compute_summary, coverage};
pub use analysis::{classify, ErrorKind, ErrorTreatment};
pub use client::ApiClient;
pub use config::{CafeDataConfig, CafeDataConfigBuilder, StalePolicy};
pub use context::{CurrentUser, Locale, RequestContext};
pub use controller::{follow_context, FetchController, FetchPhase, FetchState};
pub use error::{CafeDataError, Result};
pub use http::{HttpTransport, TransportFailure};
pub use notify::{ChannelNotifier, RecordingNotifier, Toast, TracingNotifier};
pub use traits::{Notifier, Resource, Transport};
pub use types::{DimensionCoverage, Favorite, Location, RatingRecord, RatingSummary};
