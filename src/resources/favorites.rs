use crate::context::RequestContext;
use crate::traits::Resource;
use crate::types::{Favorite, ListPayload};

/// The signed-in user's favorite cafes
#[derive(Debug, Clone, Copy, Default)]
pub struct Favorites;

impl Resource for Favorites {
    type Key = ();
    type Payload = ListPayload<Favorite>;
    type Data = Vec<Favorite>;

    fn name(&self) -> &'static str {
        "favorites"
    }

    fn path(&self, _key: &()) -> String {
        "favorites/".to_string()
    }

    fn normalize(&self, payload: Self::Payload, _ctx: &RequestContext) -> Vec<Favorite> {
        let mut favorites = payload.into_items();
        // Most recently added first
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        favorites
    }

    fn requires_auth(&self) -> bool {
        true
    }
}
