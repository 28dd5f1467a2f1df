//! Read-only account resources: properties, mboxes, profile attributes and
//! environments.

use serde_json::{Map, Value};

use super::core::{id_params, TargetClient};
use crate::catalog::Operation;
use crate::types::{ApiResponse, CallOptions};
use crate::Result;

impl TargetClient {
    pub async fn get_properties(&self, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetProperties, Map::new(), None, &options)
            .await
    }

    pub async fn get_property_by_id(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetPropertyById, id_params(id), None, &options)
            .await
    }

    pub async fn get_mboxes(&self, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetMboxes, Map::new(), None, &options)
            .await
    }

    /// Fetch one mbox. The name is percent-encoded as a single path segment,
    /// so names containing `/` or spaces are safe.
    pub async fn get_mbox_by_name(&self, name: &str, options: CallOptions) -> Result<ApiResponse> {
        let mut params = Map::new();
        params.insert("mboxName".into(), Value::from(name));
        self.execute(Operation::GetMboxByName, params, None, &options)
            .await
    }

    pub async fn get_mbox_profile_attributes(&self, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetMboxProfileAttributes, Map::new(), None, &options)
            .await
    }

    pub async fn get_environments(&self, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetEnvironments, Map::new(), None, &options)
            .await
    }
}
