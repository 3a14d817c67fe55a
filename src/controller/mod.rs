//! Fetch orchestration: one controller per resource type

pub mod fetch;
pub mod state;

pub use fetch::{follow_context, FetchController};
pub use state::{FetchPhase, FetchState};
