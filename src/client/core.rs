use crate::catalog::{Operation, OperationCatalog};
use crate::client::builder::TargetClientBuilder;
use crate::client::credentials::Credentials;
use crate::config::{ENV_API_KEY, ENV_TENANT, ENV_TOKEN};
use crate::error::ErrorContext;
use crate::request::{self, CallInput};
use crate::transport::{Transport, TransportError};
use crate::types::{ApiResponse, CallOptions, ListOptions};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A Target API session.
///
/// Cloning is cheap and clones share the transport's connection pool.
/// Nothing mutates after construction, so a client may serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct TargetClient {
    credentials: Credentials,
    catalog: Arc<OperationCatalog>,
    server_template: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for TargetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetClient")
            .field("credentials", &self.credentials)
            .field("server_template", &self.server_template)
            .field("transport", &self.transport.name())
            .field("operations", &self.catalog.len())
            .finish()
    }
}

impl TargetClient {
    pub fn builder() -> TargetClientBuilder {
        TargetClientBuilder::new()
    }

    /// Create a session with default settings.
    pub fn new(
        tenant: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        TargetClientBuilder::new()
            .tenant(tenant)
            .api_key(api_key)
            .token(token)
            .build()
    }

    /// Create a session from `TARGET_TENANT`, `TARGET_APIKEY` and `TARGET_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let mut builder = TargetClientBuilder::new();
        if let Ok(tenant) = std::env::var(ENV_TENANT) {
            builder = builder.tenant(tenant);
        }
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            builder = builder.api_key(api_key);
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            builder = builder.token(token);
        }
        builder.build()
    }

    pub(crate) fn from_parts(
        credentials: Credentials,
        catalog: Arc<OperationCatalog>,
        server_template: String,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            catalog,
            server_template,
            transport,
        }
    }

    pub fn tenant(&self) -> &str {
        self.credentials.tenant()
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    /// Server URL template the session resolves against.
    pub fn server_template(&self) -> &str {
        &self.server_template
    }

    /// Invoke any catalog operation.
    ///
    /// The typed methods (`get_activities`, `create_offer`, ...) all funnel
    /// through here. `params` supplies path placeholders and query values;
    /// `body` is ignored for operations without one and defaults to `{}` for
    /// operations with one.
    ///
    /// Every failure is reported as [`Error::Operation`] carrying the
    /// operation's own error code.
    pub async fn execute(
        &self,
        operation: Operation,
        params: Map<String, Value>,
        body: Option<Value>,
        options: &CallOptions,
    ) -> Result<ApiResponse> {
        let descriptor = self.catalog.get(operation)?;
        let body = if descriptor.body {
            Some(body.unwrap_or_else(|| Value::Object(Map::new())))
        } else {
            None
        };

        let input = CallInput {
            params: &params,
            body: body.as_ref(),
            headers: &options.headers,
        };

        let outcome = match request::build(&self.server_template, &self.credentials, descriptor, input) {
            Ok(req) => {
                debug!(
                    operation = %operation,
                    method = %req.method,
                    url = %req.url,
                    transport = self.transport.name(),
                    "dispatching request"
                );
                self.transport.send(req).await
            }
            Err(e) => Err(e),
        };

        let outcome = outcome.and_then(|resp| {
            if resp.is_success() {
                Ok(resp)
            } else {
                Err(TransportError::from_response(&resp))
            }
        });

        match outcome {
            Ok(resp) => {
                debug!(operation = %operation, status = resp.status, "request completed");
                Ok(resp)
            }
            Err(source) => {
                let code = operation.error_code();
                warn!(
                    operation = %operation,
                    code = %code,
                    status = ?source.status(),
                    "target api call failed: {}",
                    source
                );
                Err(Error::operation(
                    code,
                    ErrorContext::new(Value::Object(params), body),
                    source,
                ))
            }
        }
    }
}

/// `{"id": id}`
pub(crate) fn id_params(id: i64) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("id".into(), Value::from(id));
    params
}

/// Pagination parameters. `limit` and `offset` are always bound; `sortBy`
/// only when set.
pub(crate) fn list_params(options: &ListOptions) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("limit".into(), Value::from(options.effective_limit()));
    params.insert("offset".into(), Value::from(options.effective_offset()));
    if let Some(sort_by) = &options.sort_by {
        params.insert("sortBy".into(), Value::from(sort_by.as_str()));
    }
    params
}

/// One-field JSON object, e.g. `{"name": "Summer sale"}`.
pub(crate) fn field_body(field: &str, value: Value) -> Value {
    let mut body = Map::new();
    body.insert(field.into(), value);
    Value::Object(body)
}
