use crate::catalog::CatalogError;
use crate::error_code::{ErrorCode, SDK_NAME};
use crate::transport::TransportError;
use thiserror::Error;

/// Diagnostics attached to a failed operation: what was being sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorContext {
    /// Bound path/query parameters as a JSON object (e.g. `{"id": 123}`).
    pub params: serde_json::Value,
    /// Request body that was sent, if the operation has one.
    pub body: Option<serde_json::Value>,
}

impl ErrorContext {
    pub fn new(params: serde_json::Value, body: Option<serde_json::Value>) -> Self {
        Self { params, body }
    }

    /// Look up one bound parameter by name.
    pub fn param(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }
}

/// Unified error type for the Target SDK.
///
/// Operation failures always carry the operation's own [`ErrorCode`]; callers
/// are expected to branch on [`Error::code`] rather than on message text.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more credentials were missing when the session was created.
    /// `missing` lists every absent field, in the order tenant, apiKey, token.
    #[error(
        "[{}:{}] SDK initialization error(s). Missing arguments: {}",
        SDK_NAME,
        ErrorCode::SdkInitialization,
        .missing.join(", ")
    )]
    Initialization { missing: Vec<&'static str> },

    /// A call failed: non-2xx status, network failure, or the request could
    /// not be built.
    #[error("[{}:{}] {}", SDK_NAME, .code, .source)]
    Operation {
        code: ErrorCode,
        context: Box<ErrorContext>,
        source: TransportError,
    },

    #[error("Operation catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub(crate) fn operation(code: ErrorCode, context: ErrorContext, source: TransportError) -> Self {
        Error::Operation {
            code,
            context: Box::new(context),
            source,
        }
    }

    /// Error code for initialization and operation failures.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::Initialization { .. } => Some(ErrorCode::SdkInitialization),
            Error::Operation { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Component name (`"TargetSDK"`) for coded errors.
    pub fn sdk(&self) -> Option<&'static str> {
        self.code().map(|c| c.sdk())
    }

    /// What was being sent when an operation failed.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Operation { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status of the underlying failure, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Operation { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Missing credential names for initialization failures.
    pub fn missing_arguments(&self) -> Option<&[&'static str]> {
        match self {
            Error::Initialization { missing } => Some(missing),
            _ => None,
        }
    }
}
