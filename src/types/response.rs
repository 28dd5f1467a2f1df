//! Response envelope returned by every successful call.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// Raw outcome of a successful (2xx) call.
///
/// The body is decoded as JSON when possible, keeping object keys in the
/// order the service sent them. An empty body becomes
/// [`serde_json::Value::Null`]; a body that is not JSON is kept verbatim as
/// [`serde_json::Value::String`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Build an envelope from raw response bytes.
    pub fn from_bytes(status: u16, headers: HeaderMap, bytes: &[u8]) -> Self {
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned())
            })
        };
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a caller-defined type.
    pub fn json<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// First value of a response header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
