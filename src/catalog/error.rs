//! Catalog error types

/// Catalog error types
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse operation catalog: {0}")]
    Parse(String),

    #[error("Unknown operation '{0}' in catalog")]
    UnknownOperation(String),

    #[error("Operation '{0}' is missing from the catalog")]
    MissingOperation(&'static str),

    #[error("Invalid descriptor for '{operation}': {reason}")]
    InvalidDescriptor {
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid server template '{template}': {reason}")]
    InvalidServer { template: String, reason: String },
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(e: serde_yaml::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
