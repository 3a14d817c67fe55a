pub mod client;
pub mod failure;
pub mod response_converter;

pub use client::HttpTransport;
pub use failure::{ErrorEnvelope, TransportFailure};
pub use response_converter::ResponseConverter;
