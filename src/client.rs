use crate::config::CafeDataConfig;
use crate::context::RequestContext;
use crate::controller::FetchController;
use crate::error::Result;
use crate::http::HttpTransport;
use crate::resources::{CafeReviews, Favorites, Locations, MyReviews, TrendingLocations};
use crate::traits::{Notifier, Resource, Transport};

/// Builds fetch controllers for every resource, sharing one transport and notifier
#[derive(Clone)]
pub struct ApiClient<T, N> {
    config: CafeDataConfig,
    transport: T,
    notifier: N,
}

impl<N: Notifier + Clone> ApiClient<HttpTransport, N> {
    /// Create a client talking HTTP to the configured API
    pub fn new(config: CafeDataConfig, notifier: N) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            config,
            transport,
            notifier,
        })
    }
}

impl<T, N> ApiClient<T, N>
where
    T: Transport + Clone,
    N: Notifier + Clone,
{
    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: CafeDataConfig, transport: T, notifier: N) -> Self {
        Self {
            config,
            transport,
            notifier,
        }
    }

    pub fn config(&self) -> &CafeDataConfig {
        &self.config
    }

    /// Context using the configured default locale and no user
    pub fn default_context(&self) -> RequestContext {
        RequestContext::new(self.config.default_locale())
    }

    /// Controller for any resource descriptor
    pub fn controller<R: Resource>(&self, resource: R) -> FetchController<R, T, N> {
        FetchController::new(
            resource,
            self.transport.clone(),
            self.notifier.clone(),
            &self.config,
        )
    }

    pub fn locations(&self) -> FetchController<Locations, T, N> {
        self.controller(Locations)
    }

    pub fn trending_locations(&self) -> FetchController<TrendingLocations, T, N> {
        self.controller(TrendingLocations)
    }

    pub fn cafe_reviews(&self) -> FetchController<CafeReviews, T, N> {
        self.controller(CafeReviews)
    }

    pub fn my_reviews(&self) -> FetchController<MyReviews, T, N> {
        self.controller(MyReviews)
    }

    pub fn favorites(&self) -> FetchController<Favorites, T, N> {
        self.controller(Favorites)
    }
}
