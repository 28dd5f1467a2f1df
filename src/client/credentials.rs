//! Session credentials.

use std::fmt;

use crate::{Error, Result};

/// Tenant, API key and bearer token bound to one session.
///
/// Immutable once built. `Debug` output never shows the key or token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    tenant: String,
    api_key: String,
    token: String,
}

impl Credentials {
    /// Validate and bind credentials. Blank values count as missing; the
    /// error names every missing field, in the order tenant, apiKey, token.
    pub fn new(
        tenant: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        Self::from_parts(Some(tenant.into()), Some(api_key.into()), Some(token.into()))
    }

    pub(crate) fn from_parts(
        tenant: Option<String>,
        api_key: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let (tenant, api_key, token) = (present(tenant), present(api_key), present(token));

        let missing: Vec<&'static str> = [
            ("tenant", tenant.is_none()),
            ("apiKey", api_key.is_none()),
            ("token", token.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        match (tenant, api_key, token) {
            (Some(tenant), Some(api_key), Some(token)) => Ok(Self {
                tenant,
                api_key,
                token,
            }),
            _ => Err(Error::Initialization { missing }),
        }
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("tenant", &self.tenant)
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}
