//! HTTP transport adapter for the messaging REST API SDK.
//!
//! This crate bridges the SDK core's transport abstraction to the `reqwest`
//! HTTP client. It owns no protocol logic: its job is to turn "perform this
//! HTTP method against this URL with this payload" into a single client
//! call and hand back the body and numeric status code unmodified.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - **models**: Transient data structures for requests and responses
//! - **transport**: The `Transport` contract, its error taxonomy, the
//!   shared failure-status interpreter, and the `ReqwestTransport` adapter
//!
//! # Usage
//!
//! ```no_run
//! use messaging_transport::{ReqwestTransport, Transport};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new("live_abc123")?;
//!
//! let response = transport.send_request(
//!     "POST",
//!     "https://rest.example.com/messages",
//!     Some(&serde_json::json!({ "recipient": "31612345678" })),
//! )?;
//!
//! println!("Status: {}", response.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! Status interpretation is deliberately left to the caller: a 422 or a
//! 500 comes back as an ordinary [`ApiResponse`], not an error. Only the
//! file-download path classifies failure statuses itself, through
//! [`transport::interpret_failure_status`].

pub mod models;
pub mod transport;

pub use models::{ApiResponse, HttpMethod};
pub use transport::{
    interpret_failure_status, ReqwestTransport, Transport, TransportConfig, TransportError,
};
