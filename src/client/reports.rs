//! Activity reports.

use super::core::{id_params, TargetClient};
use crate::catalog::Operation;
use crate::types::{ApiResponse, CallOptions};
use crate::Result;

impl TargetClient {
    pub async fn get_ab_activity_performance(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetAbActivityPerformance, id_params(id), None, &options)
            .await
    }

    pub async fn get_xt_activity_performance(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetXtActivityPerformance, id_params(id), None, &options)
            .await
    }

    /// Performance report for Automated Personalization (`abt`) activities.
    pub async fn get_activity_performance(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetActivityPerformance, id_params(id), None, &options)
            .await
    }

    pub async fn get_orders_report(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetOrdersReport, id_params(id), None, &options)
            .await
    }
}
