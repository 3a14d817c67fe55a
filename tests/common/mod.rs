//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use cafe_data::{ApiClient, CafeDataConfig, HttpTransport, RecordingNotifier};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const SERVER_TOAST: &str = "Server trouble, try again";
pub const GENERIC_INLINE: &str = "Could not load";

/// Client pointed at a running mock server with recognisable messages
pub fn client_for(server: &MockServer) -> (ApiClient<HttpTransport, RecordingNotifier>, RecordingNotifier) {
    let config = CafeDataConfig::builder()
        .base_url(format!("{}/api", server.uri()))
        .timeout(5)
        .server_error_message(SERVER_TOAST)
        .generic_error_message(GENERIC_INLINE)
        .build()
        .unwrap();

    let notifier = RecordingNotifier::new();
    let client = ApiClient::new(config, notifier.clone()).unwrap();
    (client, notifier)
}

pub fn review(id_suffix: u32, overall: f64, wifi: Option<f64>, created_at: &str) -> Value {
    json!({
        "id": format!("00000000-0000-4000-8000-{:012}", id_suffix),
        "author_name": "Mara",
        "rating_overall": overall,
        "rating_wifi": wifi,
        "rating_power": null,
        "text": "Good flat white",
        "language": "en",
        "photos": [],
        "is_verified": false,
        "created_at": created_at
    })
}

pub fn location(id_suffix: u32, name: &str, slug: &str) -> Value {
    json!({
        "id": format!("10000000-0000-4000-8000-{:012}", id_suffix),
        "name": name,
        "slug": slug,
        "country": "Germany",
        "country_code": "DE",
        "image_url": "",
        "thumbnail_url": "",
        "cafe_count": 12,
        "is_featured": false
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}
