//! # Types Module
//!
//! Plain data types that cross the public API boundary: per-call options,
//! the response envelope, and the batch request body.
//!
//! Resource payloads (activities, offers, audiences, ...) stay raw
//! [`serde_json::Value`]s, forwarded unchanged in both directions.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CallOptions`] | Per-call header overrides |
//! | [`ListOptions`] | Pagination + sorting for list endpoints, plus header overrides |
//! | [`ApiResponse`] | Status, headers and decoded JSON body of a successful call |
//! | [`BatchRequest`] | Bundle of sub-operations for `execute_batch` |
//!
//! ## Example
//!
//! ```rust
//! use target_sdk::types::{ListOptions, DEFAULT_LIMIT};
//!
//! let opts = ListOptions::new().offset(20).sort_by("name");
//! assert_eq!(opts.effective_limit(), DEFAULT_LIMIT);
//! assert_eq!(opts.effective_offset(), 20);
//! ```

pub mod batch;
pub mod options;
pub mod response;

pub use batch::{BatchHeader, BatchOperation, BatchRequest};
pub use options::{CallOptions, ListOptions, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use response::ApiResponse;
