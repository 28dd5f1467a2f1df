use serde_json::{Map, Value};

use super::core::TargetClient;
use crate::catalog::Operation;
use crate::error::ErrorContext;
use crate::transport::TransportError;
use crate::types::{ApiResponse, BatchRequest, CallOptions};
use crate::{Error, Result};

impl TargetClient {
    /// Submit several operations in one request.
    ///
    /// The batch is forwarded as-is; `dependsOnOperationIds` ordering is
    /// enforced by the service, not here. The response body holds one
    /// result per operation.
    pub async fn execute_batch(&self, batch: &BatchRequest, options: CallOptions) -> Result<ApiResponse> {
        let body = serde_json::to_value(batch).map_err(unserializable_batch)?;
        self.execute(Operation::ExecuteBatch, Map::new(), Some(body), &options)
            .await
    }
}

/// Nothing was sent; still reported under the batch operation's own code.
fn unserializable_batch(e: serde_json::Error) -> Error {
    Error::operation(
        Operation::ExecuteBatch.error_code(),
        ErrorContext::new(Value::Object(Map::new()), None),
        TransportError::Request(format!("batch body could not be serialized: {}", e)),
    )
}
