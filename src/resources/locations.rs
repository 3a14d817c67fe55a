use crate::context::RequestContext;
use crate::traits::Resource;
use crate::types::{ListPayload, Location};

/// All active locations; names come back localized
#[derive(Debug, Clone, Copy, Default)]
pub struct Locations;

impl Resource for Locations {
    type Key = ();
    type Payload = ListPayload<Location>;
    type Data = Vec<Location>;

    fn name(&self) -> &'static str {
        "locations"
    }

    fn path(&self, _key: &()) -> String {
        "locations/".to_string()
    }

    fn normalize(&self, payload: Self::Payload, _ctx: &RequestContext) -> Vec<Location> {
        payload.into_items()
    }
}

/// Locations ranked by recent activity
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingLocations;

impl Resource for TrendingLocations {
    type Key = ();
    type Payload = ListPayload<Location>;
    type Data = Vec<Location>;

    fn name(&self) -> &'static str {
        "trending_locations"
    }

    fn path(&self, _key: &()) -> String {
        "locations/trending/".to_string()
    }

    fn normalize(&self, payload: Self::Payload, _ctx: &RequestContext) -> Vec<Location> {
        payload.into_items()
    }
}
