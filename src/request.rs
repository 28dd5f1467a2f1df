//! Request construction.
//!
//! Turns an operation descriptor plus the call's parameters, body and header
//! overrides into an [`HttpRequest`]. Every step is a plain function so it can
//! be exercised without a transport.
//!
//! Header precedence, lowest to highest:
//!
//! 1. generic fallback: `x-api-key`, `Authorization: Bearer <token>`,
//!    `Content-Type: application/json`, each set only when absent;
//! 2. operation profile: `Accept` (and `Content-Type` for operations with a
//!    body) set to the resource's versioned media type;
//! 3. explicit per-call overrides, which replace the whole header they name.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value};
use url::Url;

use crate::catalog::validator::whole_placeholder;
use crate::catalog::{OperationDescriptor, TENANT_PLACEHOLDER};
use crate::client::Credentials;
use crate::transport::{HttpRequest, TransportError};

pub const X_API_KEY: &str = "x-api-key";
pub const FALLBACK_CONTENT_TYPE: &str = "application/json";

/// Default headers dictated by the operation's media profile.
pub fn profile_headers(descriptor: &OperationDescriptor) -> HeaderMap {
    let media_type = HeaderValue::from_static(descriptor.profile.media_type());
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, media_type.clone());
    if descriptor.body {
        headers.insert(CONTENT_TYPE, media_type);
    }
    headers
}

/// Convert caller-supplied `(name, value)` pairs into a header map. Names
/// compare case-insensitively and the last value given for a name wins.
pub fn parse_overrides(overrides: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    for (name, value) in overrides {
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| TransportError::Request(format!("invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::Request(format!("invalid value for header '{}': {}", name, e)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Layer `overrides` on top of `defaults`. A header named in `overrides`
/// loses all of its default values; headers not named keep them.
pub fn merge_headers(defaults: HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults;
    for (name, value) in overrides {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Fill in credentials and the fallback content type where absent. Existing
/// values are never replaced.
pub fn inject_auth(headers: &mut HeaderMap, credentials: &Credentials) -> Result<(), TransportError> {
    let api_key = HeaderName::from_static(X_API_KEY);
    if !headers.contains_key(&api_key) {
        let mut value = HeaderValue::from_str(credentials.api_key())
            .map_err(|_| TransportError::Request("api key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        headers.insert(api_key, value);
    }
    if !headers.contains_key(AUTHORIZATION) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", credentials.token()))
            .map_err(|_| TransportError::Request("token is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FALLBACK_CONTENT_TYPE));
    }
    Ok(())
}

/// Expand the server template for one tenant. The tenant is percent-encoded,
/// so `?`, `#` or `/` in it cannot change the request target.
pub fn resolve_server(template: &str, tenant: &str) -> Result<Url, TransportError> {
    let expanded = template.replace(TENANT_PLACEHOLDER, &encode_segment(tenant));
    let url = Url::parse(&expanded)
        .map_err(|e| TransportError::Request(format!("invalid server URL '{}': {}", expanded, e)))?;
    if url.cannot_be_a_base() {
        return Err(TransportError::Request(format!(
            "server URL '{}' cannot be a base",
            expanded
        )));
    }
    Ok(url)
}

/// Percent-encode everything but unreserved characters. `byte_serialize`
/// emits `+` only for spaces (a literal `+` becomes `%2B`).
fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Render a parameter for a path segment or query string. `null` and empty
/// strings count as unset.
fn param_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Append the operation path to `server`, substituting placeholders from
/// `params`, then add the declared query parameters that are set.
pub fn bind_url(
    server: Url,
    descriptor: &OperationDescriptor,
    params: &Map<String, Value>,
) -> Result<Url, TransportError> {
    let mut url = server;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| TransportError::Request("server URL cannot be a base".to_string()))?;
        segments.pop_if_empty();
        for segment in descriptor.path.split('/').filter(|s| !s.is_empty()) {
            match whole_placeholder(segment) {
                Some(name) => {
                    let value = params.get(name).and_then(param_to_string).ok_or_else(|| {
                        TransportError::Request(format!("missing path parameter '{}'", name))
                    })?;
                    segments.push(&value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    let query: Vec<(&str, String)> = descriptor
        .query
        .iter()
        .filter_map(|name| {
            params
                .get(name)
                .and_then(param_to_string)
                .map(|v| (name.as_str(), v))
        })
        .collect();
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Everything a single call contributes to its request.
#[derive(Debug, Clone, Copy)]
pub struct CallInput<'a> {
    pub params: &'a Map<String, Value>,
    pub body: Option<&'a Value>,
    pub headers: &'a [(String, String)],
}

/// Run the full pipeline: bind, negotiate headers, inject auth, resolve server.
pub fn build(
    server_template: &str,
    credentials: &Credentials,
    descriptor: &OperationDescriptor,
    input: CallInput<'_>,
) -> Result<HttpRequest, TransportError> {
    let server = resolve_server(server_template, credentials.tenant())?;
    let url = bind_url(server, descriptor, input.params)?;

    let overrides = parse_overrides(input.headers)?;
    let mut headers = merge_headers(profile_headers(descriptor), &overrides);
    inject_auth(&mut headers, credentials)?;

    let body = if descriptor.body {
        Some(input.body.cloned().unwrap_or_else(|| Value::Object(Map::new())))
    } else {
        None
    };

    Ok(HttpRequest {
        method: descriptor.method,
        url,
        headers,
        body,
    })
}
