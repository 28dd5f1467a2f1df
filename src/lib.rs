//! # target-sdk
//!
//! Async client for the Adobe Target Admin REST API.
//!
//! ## Overview
//!
//! Every API operation is described once, as data, in an embedded operation
//! catalog: HTTP method, path template, query parameters, and the versioned
//! media type the resource speaks. A single dispatcher turns a catalog entry
//! plus call arguments into a request, so the typed methods on
//! [`TargetClient`] carry no per-operation transport logic.
//!
//! - **Sessions**: [`init`] or [`TargetClientBuilder`] validate the tenant,
//!   API key and access token once. A [`TargetClient`] is immutable and can
//!   be shared across tasks.
//! - **Content negotiation**: activities and audiences use the v3 media type,
//!   offers/properties/mboxes v2, state changes and reports v1. Per-call
//!   headers in [`CallOptions`] override these defaults.
//! - **Errors**: every failure carries a stable [`ErrorCode`] naming the
//!   operation, plus the parameters and body that were sent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use target_sdk::{init, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> target_sdk::Result<()> {
//!     let client = init("my-tenant", "my-api-key", "my-access-token").await?;
//!
//!     let page = client.get_activities(ListOptions::new().limit(10)).await?;
//!     println!("{} activities in total", page.body["total"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (session creation at `info`, each
//! request at `debug`, failures at `warn`). Credentials are never logged.
//! Install any subscriber to see them.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error_code;
pub mod request;
pub mod transport;
pub mod types;

pub use catalog::{HttpMethod, MediaProfile, Operation, OperationCatalog};
pub use client::{Credentials, TargetClient, TargetClientBuilder};
pub use config::ClientConfig;
pub use error_code::{ErrorCode, SDK_NAME};
pub use transport::{HttpRequest, ReqwestTransport, Transport, TransportError};
pub use types::{
    ApiResponse, BatchHeader, BatchOperation, BatchRequest, CallOptions, ListOptions,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

/// Create a session with default settings.
///
/// Fails with [`Error::Initialization`] naming every missing or blank
/// credential. Server URL, timeout and proxy may be tuned through the
/// environment (see [`config`]) or with [`TargetClientBuilder`].
pub async fn init(
    tenant: impl Into<String>,
    api_key: impl Into<String>,
    token: impl Into<String>,
) -> Result<TargetClient> {
    TargetClient::new(tenant, api_key, token)
}
