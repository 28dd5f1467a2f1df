use crate::catalog::{self, OperationCatalog};
use crate::client::core::TargetClient;
use crate::client::credentials::Credentials;
use crate::config::ClientConfig;
use crate::transport::{ReqwestTransport, Transport};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builder for creating clients with custom configuration.
///
/// Anything not set here falls back to the environment (see
/// [`crate::config`]) and then to built-in defaults.
#[derive(Default)]
pub struct TargetClientBuilder {
    tenant: Option<String>,
    api_key: Option<String>,
    token: Option<String>,
    server_url: Option<String>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    catalog: Option<Arc<OperationCatalog>>,
    transport: Option<Arc<dyn Transport>>,
}

impl TargetClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the server URL template. Must contain `{tenant-name}`.
    ///
    /// Primarily for testing against mock servers.
    pub fn server_url(mut self, template: impl Into<String>) -> Self {
        self.server_url = Some(template.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Use a custom operation catalog instead of the embedded one.
    pub fn catalog(mut self, catalog: Arc<OperationCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Inject a transport. Default is [`ReqwestTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// Credentials are checked first, so a missing tenant/apiKey/token is
    /// always reported as [`Error::Initialization`].
    pub fn build(self) -> Result<TargetClient> {
        self.build_with_config(ClientConfig::from_env())
    }

    pub(crate) fn build_with_config(self, env_config: ClientConfig) -> Result<TargetClient> {
        let credentials = Credentials::from_parts(self.tenant, self.api_key, self.token)?;

        let catalog = match self.catalog {
            Some(c) => c,
            None => catalog::embedded()?,
        };

        let config = ClientConfig {
            server_url: self.server_url.or(env_config.server_url),
            timeout: self.timeout.unwrap_or(env_config.timeout),
            proxy: self.proxy.or(env_config.proxy),
            pool_max_idle_per_host: env_config.pool_max_idle_per_host,
        };

        let server_template = config
            .server_url
            .clone()
            .unwrap_or_else(|| catalog.server().to_string());
        catalog::validator::validate_server(&server_template)
            .map_err(|e| Error::configuration(e.to_string()))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        info!(
            tenant = %credentials.tenant(),
            server = %server_template,
            transport = transport.name(),
            "target sdk initialized"
        );

        Ok(TargetClient::from_parts(
            credentials,
            catalog,
            server_template,
            transport,
        ))
    }
}
