use crate::context::RequestContext;
use crate::http::TransportFailure;
use crate::traits::Transport;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub locale: String,
    pub authenticated: bool,
}

#[derive(Clone)]
struct MockReply {
    outcome: Result<Value, TransportFailure>,
    gate: Option<Arc<Notify>>,
}

#[derive(Default)]
struct MockState {
    queued: HashMap<String, VecDeque<MockReply>>,
    fixed: HashMap<String, MockReply>,
    calls: Vec<RecordedCall>,
}

/// Scripted transport for controller tests; clones share one script
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request for `path` with `body`
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.insert_fixed(path, Ok(body), None);
        self
    }

    /// Fail every request for `path`
    pub fn with_failure(self, path: &str, failure: TransportFailure) -> Self {
        self.insert_fixed(path, Err(failure), None);
        self
    }

    /// Queue a one-shot reply that is only released once `gate` is notified.
    /// Queued replies take precedence over fixed ones.
    pub fn with_gated_json(self, path: &str, body: Value, gate: Arc<Notify>) -> Self {
        self.push_queued(path, Ok(body), Some(gate));
        self
    }

    /// Queue a one-shot reply for `path`
    pub fn with_queued(self, path: &str, outcome: Result<Value, TransportFailure>) -> Self {
        self.push_queued(path, outcome, None);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    fn insert_fixed(&self, path: &str, outcome: Result<Value, TransportFailure>, gate: Option<Arc<Notify>>) {
        self.state
            .lock()
            .unwrap()
            .fixed
            .insert(path.to_string(), MockReply { outcome, gate });
    }

    fn push_queued(&self, path: &str, outcome: Result<Value, TransportFailure>, gate: Option<Arc<Notify>>) {
        self.state
            .lock()
            .unwrap()
            .queued
            .entry(path.to_string())
            .or_default()
            .push_back(MockReply { outcome, gate });
    }

    fn next_reply(&self, path: &str, ctx: &RequestContext) -> Option<MockReply> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            path: path.to_string(),
            locale: ctx.locale.to_string(),
            authenticated: ctx.is_authenticated(),
        });

        if let Some(reply) = state.queued.get_mut(path).and_then(VecDeque::pop_front) {
            return Some(reply);
        }
        state.fixed.get(path).cloned()
    }
}

impl Transport for MockTransport {
    async fn get<P>(&self, path: &str, ctx: &RequestContext) -> Result<P, TransportFailure>
    where
        P: DeserializeOwned + Send + 'static,
    {
        let Some(reply) = self.next_reply(path, ctx) else {
            return Err(TransportFailure::malformed(format!(
                "Mock reply not found for path: {}",
                path
            )));
        };

        if let Some(gate) = reply.gate {
            gate.notified().await;
        }

        let body = reply.outcome?;
        serde_json::from_value(body).map_err(|e| TransportFailure::malformed(e.to_string()))
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use serde_json::{json, Value};

    pub fn review_json(id_suffix: u32, overall: u8, wifi: Option<u8>, created_at: &str) -> Value {
        json!({
            "id": format!("00000000-0000-4000-8000-{:012}", id_suffix),
            "author_name": "Test Author",
            "author_avatar_url": null,
            "rating_overall": overall,
            "rating_wifi": wifi,
            "rating_power": null,
            "rating_noise": null,
            "rating_coffee": null,
            "text": "Solid espresso and reliable wifi",
            "language": "en",
            "photos": [],
            "is_verified": false,
            "created_at": created_at
        })
    }

    pub fn location_json(id_suffix: u32, name: &str, slug: &str) -> Value {
        json!({
            "id": format!("10000000-0000-4000-8000-{:012}", id_suffix),
            "name": name,
            "slug": slug,
            "country": "Germany",
            "country_code": "DE",
            "image_url": "",
            "thumbnail_url": "",
            "cafe_count": 3,
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
}
