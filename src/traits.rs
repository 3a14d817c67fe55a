use crate::context::RequestContext;
use crate::http::TransportFailure;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::future::Future;

/// Typed GET against the remote API
pub trait Transport: Send + Sync {
    /// Fetch `path` (relative to the API root) and decode it as `P`
    fn get<P>(
        &self,
        path: &str,
        ctx: &RequestContext,
    ) -> impl Future<Output = std::result::Result<P, TransportFailure>> + Send
    where
        P: DeserializeOwned + Send + 'static;
}

/// Fire-and-forget, auto-dismissing user notification ("toast")
pub trait Notifier: Send + Sync {
    fn show_transient_error(&self, message: &str);
}

/// Describes one kind of remote collection and how to shape it
pub trait Resource: Send + Sync + 'static {
    /// Identifier scoping a fetch, e.g. a cafe slug
    type Key: Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Raw wire payload
    type Payload: DeserializeOwned + Send + 'static;
    /// Normalized shape handed to the presentation layer
    type Data: Clone + Default + Send + Sync + 'static;

    /// Short name used in log events
    fn name(&self) -> &'static str;

    /// Path relative to the API root
    fn path(&self, key: &Self::Key) -> String;

    fn normalize(&self, payload: Self::Payload, ctx: &RequestContext) -> Self::Data;

    /// Resources scoped to the signed-in user stay idle without one
    fn requires_auth(&self) -> bool {
        false
    }

    /// Reject a key no API route can match. Runs before any request is made.
    fn check_key(&self, _key: &Self::Key) -> std::result::Result<(), TransportFailure> {
        Ok(())
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn get<P>(
        &self,
        path: &str,
        ctx: &RequestContext,
    ) -> impl Future<Output = std::result::Result<P, TransportFailure>> + Send
    where
        P: DeserializeOwned + Send + 'static,
    {
        (**self).get(path, ctx)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn show_transient_error(&self, message: &str) {
        (**self).show_transient_error(message)
    }
}
