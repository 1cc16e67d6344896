//! Core data models for the transport layer.
//!
//! Everything here is transient: values are constructed per call and
//! discarded once the SDK core has consumed them.

pub mod request;
pub mod response;

pub use request::HttpMethod;
pub use response::ApiResponse;
