//! Activity operations: AB and Experience Targeting (XT) activities.

use serde_json::{Map, Value};

use super::core::{field_body, id_params, list_params, TargetClient};
use crate::catalog::Operation;
use crate::types::{ApiResponse, CallOptions, ListOptions};
use crate::Result;

impl TargetClient {
    /// List activities of every type. Paginated with `limit`/`offset`,
    /// optionally sorted by `sort_by`.
    pub async fn get_activities(&self, options: ListOptions) -> Result<ApiResponse> {
        let params = list_params(&options);
        self.execute(Operation::GetActivities, params, None, &options.call)
            .await
    }

    pub async fn create_ab_activity(&self, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(
            Operation::CreateAbActivity,
            Map::new(),
            Some(body.clone()),
            &options,
        )
        .await
    }

    pub async fn create_xt_activity(&self, body: &Value, options: CallOptions) -> Result<ApiResponse> {
        self.execute(
            Operation::CreateXtActivity,
            Map::new(),
            Some(body.clone()),
            &options,
        )
        .await
    }

    pub async fn get_ab_activity_by_id(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetAbActivityById, id_params(id), None, &options)
            .await
    }

    pub async fn get_xt_activity_by_id(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetXtActivityById, id_params(id), None, &options)
            .await
    }

    pub async fn update_ab_activity(
        &self,
        id: i64,
        body: &Value,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::UpdateAbActivity,
            id_params(id),
            Some(body.clone()),
            &options,
        )
        .await
    }

    pub async fn update_xt_activity(
        &self,
        id: i64,
        body: &Value,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::UpdateXtActivity,
            id_params(id),
            Some(body.clone()),
            &options,
        )
        .await
    }

    /// Rename an activity. Sends `{"name": name}`.
    pub async fn set_activity_name(
        &self,
        id: i64,
        name: &str,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::SetActivityName,
            id_params(id),
            Some(field_body("name", Value::from(name))),
            &options,
        )
        .await
    }

    /// Change an activity's state (e.g. `approved`, `deactivated`).
    pub async fn set_activity_state(
        &self,
        id: i64,
        state: &str,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::SetActivityState,
            id_params(id),
            Some(field_body("state", Value::from(state))),
            &options,
        )
        .await
    }

    pub async fn set_activity_priority(
        &self,
        id: i64,
        priority: i64,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::SetActivityPriority,
            id_params(id),
            Some(field_body("priority", Value::from(priority))),
            &options,
        )
        .await
    }

    /// Set the schedule. `schedule` is sent verbatim under the `schedule` key,
    /// typically `{"startsAt": .., "endsAt": ..}`.
    pub async fn set_activity_schedule(
        &self,
        id: i64,
        schedule: &Value,
        options: CallOptions,
    ) -> Result<ApiResponse> {
        self.execute(
            Operation::SetActivitySchedule,
            id_params(id),
            Some(field_body("schedule", schedule.clone())),
            &options,
        )
        .await
    }

    pub async fn delete_ab_activity(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::DeleteAbActivity, id_params(id), None, &options)
            .await
    }

    pub async fn delete_xt_activity(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::DeleteXtActivity, id_params(id), None, &options)
            .await
    }

    pub async fn get_activity_change_log(&self, id: i64, options: CallOptions) -> Result<ApiResponse> {
        self.execute(Operation::GetActivityChangeLog, id_params(id), None, &options)
            .await
    }
}
