//! Failure classification - pure logic only
//!
//! Maps transport failures to semantic kinds and decides how each kind is
//! presented, without touching any state.

pub mod error_classifier;

pub use error_classifier::{classify, ErrorKind, ErrorTreatment};
