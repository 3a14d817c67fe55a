use serde::Serialize;

/// Lifecycle of a fetch controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FetchPhase {
    /// Nothing to fetch: no key, or a user-scoped resource without a user
    #[default]
    Idle,
    Loading,
    Success,
    /// Empty result from a 404, or from a server failure already reported by toast
    EmptyByNotFound,
    /// An inline error is held for the caller to render
    ClientVisibleError,
}

/// What the presentation layer reads for one resource
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchState<T> {
    pub data: T,
    pub is_loading: bool,
    pub error: Option<String>,
    pub phase: FetchPhase,
}

impl<T: Default> FetchState<T> {
    pub(crate) fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn success(data: T) -> Self {
        Self {
            data,
            is_loading: false,
            error: None,
            phase: FetchPhase::Success,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            data: T::default(),
            is_loading: false,
            error: None,
            phase: FetchPhase::EmptyByNotFound,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            data: T::default(),
            is_loading: false,
            error: Some(message),
            phase: FetchPhase::ClientVisibleError,
        }
    }

    /// Enter loading; data from the previous load stays visible meanwhile
    pub(crate) fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.phase = FetchPhase::Loading;
    }

    /// Resolved one way or another
    pub fn is_settled(&self) -> bool {
        !self.is_loading
    }
}
