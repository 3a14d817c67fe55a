use crate::analysis::{classify, ErrorTreatment};
use crate::config::{CafeDataConfig, MessagesConfig, StalePolicy};
use crate::context::RequestContext;
use crate::controller::state::FetchState;
use crate::http::TransportFailure;
use crate::traits::{Notifier, Resource, Transport};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Key and context of the most recent load
#[derive(Debug, Clone)]
struct ActiveRequest<K> {
    key: Option<K>,
    ctx: RequestContext,
}

/// Orchestrates fetching one resource type and owns its [`FetchState`].
///
/// Every failure is absorbed here: a 404 reads as an empty result, server
/// and network faults become an empty result plus one toast, and anything
/// else is held as an inline error message.
pub struct FetchController<R, T, N>
where
    R: Resource,
{
    resource: R,
    transport: T,
    notifier: N,
    messages: MessagesConfig,
    stale_policy: StalePolicy,
    state: watch::Sender<FetchState<R::Data>>,
    active: Mutex<Option<ActiveRequest<R::Key>>>,
    generation: AtomicU64,
}

impl<R, T, N> FetchController<R, T, N>
where
    R: Resource,
    T: Transport,
    N: Notifier,
{
    /// Create a controller using the messages and stale policy from `config`
    pub fn new(resource: R, transport: T, notifier: N, config: &CafeDataConfig) -> Self {
        Self::with_options(
            resource,
            transport,
            notifier,
            config.messages.clone(),
            config.controller.stale_policy,
        )
    }

    pub fn with_options(
        resource: R,
        transport: T,
        notifier: N,
        messages: MessagesConfig,
        stale_policy: StalePolicy,
    ) -> Self {
        let (state, _) = watch::channel(FetchState::idle());
        Self {
            resource,
            transport,
            notifier,
            messages,
            stale_policy,
            state,
            active: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Current state
    pub fn snapshot(&self) -> FetchState<R::Data> {
        self.state.borrow().clone()
    }

    /// Observe every state change
    pub fn subscribe(&self) -> watch::Receiver<FetchState<R::Data>> {
        self.state.subscribe()
    }

    /// Fetch the resource for `key` under `ctx`.
    ///
    /// An absent key, or a user-scoped resource without a signed-in user,
    /// settles to an empty idle state without issuing a request.
    pub async fn load(&self, key: Option<R::Key>, ctx: RequestContext) {
        self.remember(key.clone(), ctx.clone());
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let name = self.resource.name();

        let Some(key) = key else {
            tracing::debug!(resource = name, "no key, nothing to fetch");
            self.state.send_replace(FetchState::idle());
            return;
        };

        if self.resource.requires_auth() && !ctx.is_authenticated() {
            tracing::debug!(resource = name, "signed out, skipping user-scoped fetch");
            self.state.send_replace(FetchState::idle());
            return;
        }

        self.state.send_modify(FetchState::begin_loading);

        let path = self.resource.path(&key);
        let outcome = match self.resource.check_key(&key) {
            Ok(()) => {
                tracing::debug!(resource = name, %path, ticket, locale = %ctx.locale, "fetch issued");
                self.transport.get::<R::Payload>(&path, &ctx).await
            }
            Err(failure) => {
                tracing::debug!(resource = name, ?key, "key rejected, no request issued");
                Err(failure)
            }
        };

        let (next, toast) = match outcome {
            Ok(payload) => (FetchState::success(self.resource.normalize(payload, &ctx)), false),
            Err(failure) => self.absorb(&path, failure),
        };

        let applied = self.state.send_if_modified(|state| {
            if !self.accepts(ticket) {
                return false;
            }
            *state = next;
            true
        });

        if !applied {
            tracing::debug!(resource = name, %path, ticket, "discarded superseded response");
            return;
        }

        if toast {
            self.notifier.show_transient_error(&self.messages.server_error);
        }
    }

    /// Reissue the last load. Safe from any state, including mid-flight.
    pub async fn refetch(&self) {
        let (key, ctx) = match self.active_request() {
            Some(active) => (active.key, active.ctx),
            None => (None, RequestContext::default()),
        };
        self.load(key, ctx).await;
    }

    /// Reload only when the key or context differs from the last load.
    ///
    /// Returns whether a load was issued.
    pub async fn sync(&self, key: Option<R::Key>, ctx: RequestContext) -> bool {
        let changed = match self.active_request() {
            Some(active) => active.key != key || active.ctx != ctx,
            None => true,
        };

        if changed {
            self.load(key, ctx).await;
        }
        changed
    }

    /// Map a failure onto the state it resolves to and whether to toast
    fn absorb(&self, path: &str, failure: TransportFailure) -> (FetchState<R::Data>, bool) {
        let kind = classify(&failure);
        let name = self.resource.name();

        match kind.treatment() {
            ErrorTreatment::Silent => {
                tracing::debug!(resource = name, %path, "not found, treating as empty");
                (FetchState::empty(), false)
            }
            ErrorTreatment::Toast => {
                tracing::warn!(resource = name, %path, error = %failure, "server failure");
                (FetchState::empty(), true)
            }
            ErrorTreatment::Inline => {
                tracing::debug!(resource = name, %path, ?kind, error = %failure, "request rejected");
                let message = failure
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.messages.generic_error.clone());
                (FetchState::failed(message), false)
            }
        }
    }

    fn accepts(&self, ticket: u64) -> bool {
        match self.stale_policy {
            StalePolicy::DiscardStale => self.generation.load(Ordering::SeqCst) == ticket,
            StalePolicy::LastResolvedWins => true,
        }
    }

    fn remember(&self, key: Option<R::Key>, ctx: RequestContext) {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        *active = Some(ActiveRequest { key, ctx });
    }

    fn active_request(&self) -> Option<ActiveRequest<R::Key>> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<R, T, N> FetchController<R, T, N>
where
    R: Resource,
    T: Transport + 'static,
    N: Notifier + 'static,
{
    /// Fire-and-forget refetch
    pub fn spawn_refetch(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.refetch().await })
    }
}

/// Keep `controller` in step with an externally owned context signal.
///
/// Loads once with the current context, then re-syncs on every change
/// until the sender is dropped. A change that arrives while a load is in
/// flight cancels that load and issues the new one immediately.
pub fn follow_context<R, T, N>(
    controller: Arc<FetchController<R, T, N>>,
    key: Option<R::Key>,
    mut context: watch::Receiver<RequestContext>,
) -> JoinHandle<()>
where
    R: Resource,
    T: Transport + 'static,
    N: Notifier + 'static,
{
    tokio::spawn(async move {
        let mut interrupted = false;

        loop {
            let ctx = context.borrow_and_update().clone();
            // A cancelled load already recorded its context, so sync would see no change
            let force = interrupted;
            let update = async {
                if force {
                    controller.load(key.clone(), ctx).await;
                } else {
                    controller.sync(key.clone(), ctx).await;
                }
            };
            tokio::pin!(update);

            tokio::select! {
                _ = &mut update => {
                    interrupted = false;
                    if context.changed().await.is_err() {
                        break;
                    }
                }
                changed = context.changed() => {
                    if changed.is_err() {
                        update.await;
                        break;
                    }
                    tracing::debug!(
                        resource = controller.resource().name(),
                        "context changed mid-flight, reissuing"
                    );
                    interrupted = true;
                }
            }
        }
    })
}
