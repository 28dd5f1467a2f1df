//! # Operation Catalog
//!
//! Static description of every API operation the client can perform: verb,
//! path template, content-negotiation profile, query parameters, and whether
//! a JSON body is sent.
//!
//! The catalog is a YAML document compiled into the crate. It is parsed and
//! validated once, the first time a session is created; a malformed or
//! incomplete catalog fails session creation instead of failing individual
//! calls later.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`operation`] | `Operation`, `OperationDescriptor`, `HttpMethod`, `MediaProfile` |
//! | [`loader`] | YAML parsing and the process-wide embedded copy |
//! | [`validator`] | Completeness and consistency checks |
//! | [`error`] | `CatalogError` |
//!
//! ## Example
//!
//! ```rust
//! use target_sdk::catalog::{self, MediaProfile, Operation};
//!
//! let catalog = catalog::embedded()?;
//! let d = catalog.get(Operation::GetAbActivityById)?;
//! assert_eq!(d.path, "/activities/ab/{id}");
//! assert_eq!(d.profile, MediaProfile::V3);
//! # Ok::<(), target_sdk::catalog::CatalogError>(())
//! ```

pub mod error;
pub mod loader;
pub mod operation;
pub mod validator;

pub use error::CatalogError;
pub use loader::{embedded, from_yaml, EMBEDDED_CATALOG};
pub use operation::{HttpMethod, MediaProfile, Operation, OperationDescriptor};

use std::collections::HashMap;

/// Placeholder in the server template that is replaced by the tenant name.
pub const TENANT_PLACEHOLDER: &str = "{tenant-name}";

/// Validated, read-only set of operation descriptors.
#[derive(Debug, Clone)]
pub struct OperationCatalog {
    server: String,
    operations: HashMap<Operation, OperationDescriptor>,
}

impl OperationCatalog {
    /// Server URL template, containing [`TENANT_PLACEHOLDER`].
    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn get(&self, operation: Operation) -> Result<&OperationDescriptor, CatalogError> {
        self.operations
            .get(&operation)
            .ok_or(CatalogError::MissingOperation(operation.name()))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Descriptors in [`Operation::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        Operation::ALL
            .iter()
            .filter_map(move |op| self.operations.get(op))
    }
}
