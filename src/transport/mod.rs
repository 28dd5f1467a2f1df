//! Transport seam.
//!
//! The client builds an [`HttpRequest`] and hands it to a [`Transport`]. The
//! transport performs the round-trip and reports what came back, whatever the
//! status; interpreting non-2xx statuses is the client's job. The default
//! implementation is [`ReqwestTransport`].

pub mod http;

pub use http::ReqwestTransport;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::catalog::HttpMethod;
use crate::types::ApiResponse;

/// A fully built request, described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: url::Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request. Returns `Err` only when no response was received
    /// (connection failure, timeout, ...).
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request could not be assembled (bad header override, missing
    /// path parameter, ...). Nothing was sent.
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn from_response(response: &ApiResponse) -> Self {
        let body = match &response.body {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        TransportError::Status {
            status: response.status,
            body,
        }
    }
}
