//! Content offer operations.

use serde_json::{Map, Value};

use super::core::{id_params, list_params, TargetClient};
use crate::catalog::Operation;
use crate::types::{ApiResponse, CallOptions, ListOptions};
use crate::Result;

impl TargetClient {
    pub async fn get_offers(&self, options: ListOptions) -> Result<ApiResponse> {
        let params = list_params(&options);
        self.execute(Operation::GetOffers, params, None, &options.call)
            .await
    }

    pub async fn get_offer_by_id(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetOfferById, id_params(id), None, &options)
            .await
    }

    pub async fn create_offer(&self, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(
            Operation::CreateOffer,
            Map::new(),
            Some(body.clone()),
            &options,
        )
        .await
    }

    pub async fn update_offer(&self, id: i64, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::UpdateOffer, id_params(id), Some(body.clone()), &options)
            .await
    }

    pub async fn delete_offer(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::DeleteOffer, id_params(id), None, &options)
            .await
    }
}
