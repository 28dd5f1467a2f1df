use serde_json::{Map, Value};

use super::core::{id_params, list_params, TargetClient};
use crate::catalog::Operation;
use crate::types::{ApiResponse, CallOptions, ListOptions};
use crate::Result;

impl TargetClient {
    pub async fn get_audiences(&self, options: ListOptions) -> Result<ApiResponse> {
        let params = list_params(&options);
        self.execute(Operation::GetAudiences, params, None, &options.call)
            .await
    }

    pub async fn create_audience(&self, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(
            Operation::CreateAudience,
            Map::new(),
            Some(body.clone()),
            &options,
        )
        .await
    }

    pub async fn get_audience_by_id(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetAudienceById, id_params(id), None, &options)
            .await
    }

    pub async fn update_audience(&self, id: i64, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::UpdateAudience, id_params(id), Some(body.clone()), &options)
            .await
    }

    pub async fn delete_audience(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::DeleteAudience, id_params(id), None, &options)
            .await
    }
}
