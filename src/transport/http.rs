use async_trait::async_trait;
use reqwest::Proxy;
use std::time::Duration;

use super::{HttpRequest, Transport, TransportError};
use crate::config::ClientConfig;
use crate::types::ApiResponse;
use crate::{Error, Result};

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("Invalid proxy '{}': {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<ApiResponse, TransportError> {
        let mut req = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);

        // Content-Type was settled during header negotiation; `body` must not
        // overwrite it the way `json` would.
        if let Some(body) = &request.body {
            req = req.body(serde_json::to_vec(body).map_err(|e| TransportError::Request(e.to_string()))?);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        Ok(ApiResponse::from_bytes(status, headers, &bytes))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
