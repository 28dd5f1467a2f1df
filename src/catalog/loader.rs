//! Catalog loading from YAML, including the copy embedded in the crate.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::error::CatalogError;
use super::operation::{HttpMethod, MediaProfile, Operation, OperationDescriptor};
use super::validator;
use super::OperationCatalog;

/// API description shipped with the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("target_api.yaml");

static EMBEDDED: OnceCell<Arc<OperationCatalog>> = OnceCell::new();

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    server: String,
    operations: BTreeMap<String, RawOperation>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperation {
    method: HttpMethod,
    path: String,
    accept: MediaProfile,
    #[serde(default)]
    query: Vec<String>,
    #[serde(default)]
    body: bool,
}

/// Parse and validate a catalog document.
pub fn from_yaml(source: &str) -> Result<OperationCatalog, CatalogError> {
    let raw: RawCatalog = serde_yaml::from_str(source)?;

    let mut operations = HashMap::with_capacity(raw.operations.len());
    for (name, op) in raw.operations {
        let operation =
            Operation::from_name(&name).ok_or_else(|| CatalogError::UnknownOperation(name.clone()))?;
        let path_params = validator::placeholders(&op.path);
        operations.insert(
            operation,
            OperationDescriptor {
                operation,
                method: op.method,
                path: op.path,
                profile: op.accept,
                query: op.query,
                body: op.body,
                path_params,
            },
        );
    }

    let catalog = OperationCatalog {
        server: raw.server,
        operations,
    };
    validator::validate(&catalog)?;
    Ok(catalog)
}

/// The embedded catalog, parsed once per process and shared afterwards.
pub fn embedded() -> Result<Arc<OperationCatalog>, CatalogError> {
    EMBEDDED
        .get_or_try_init(|| {
            let catalog = from_yaml(EMBEDDED_CATALOG)?;
            tracing::debug!(
                operations = catalog.len(),
                server = %catalog.server(),
                "operation catalog loaded"
            );
            Ok(Arc::new(catalog))
        })
        .cloned()
}
