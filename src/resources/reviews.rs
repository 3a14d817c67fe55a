use crate::context::RequestContext;
use crate::http::TransportFailure;
use crate::traits::Resource;
use crate::types::{ListPayload, RatingRecord};

/// Reviews of one cafe, keyed by the cafe slug
#[derive(Debug, Clone, Copy, Default)]
pub struct CafeReviews;

impl Resource for CafeReviews {
    type Key = String;
    type Payload = ListPayload<RatingRecord>;
    type Data = Vec<RatingRecord>;

    fn name(&self) -> &'static str {
        "cafe_reviews"
    }

    fn path(&self, slug: &String) -> String {
        format!("cafes/{}/reviews/", slug.trim())
    }

    /// The API routes only `[-A-Za-z0-9_]+` slugs; anything else reads as an unknown cafe
    fn check_key(&self, slug: &String) -> Result<(), TransportFailure> {
        if is_slug(slug.trim()) {
            Ok(())
        } else {
            Err(TransportFailure::http(404, None::<String>))
        }
    }

    fn normalize(&self, payload: Self::Payload, _ctx: &RequestContext) -> Vec<RatingRecord> {
        newest_first(payload.into_items())
    }
}

/// Reviews written by the signed-in user
#[derive(Debug, Clone, Copy, Default)]
pub struct MyReviews;

impl Resource for MyReviews {
    type Key = ();
    type Payload = ListPayload<RatingRecord>;
    type Data = Vec<RatingRecord>;

    fn name(&self) -> &'static str {
        "my_reviews"
    }

    fn path(&self, _key: &()) -> String {
        "reviews/me/".to_string()
    }

    fn normalize(&self, payload: Self::Payload, _ctx: &RequestContext) -> Vec<RatingRecord> {
        newest_first(payload.into_items())
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn newest_first(mut records: Vec<RatingRecord>) -> Vec<RatingRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records
}
