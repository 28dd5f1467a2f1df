//! Mock HTTP server setup for integration tests

use async_trait::async_trait;
use mockito::{Server, ServerGuard};
use reqwest::header::HeaderMap;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use target_sdk::catalog::Operation;
use target_sdk::transport::{HttpRequest, Transport, TransportError};
use target_sdk::{ApiResponse, BatchOperation, BatchRequest, CallOptions, ListOptions, TargetClient};

pub const TENANT: &str = "test-tenant";
pub const API_KEY: &str = "test-apikey";
pub const TOKEN: &str = "test-token";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub server_template: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let server_template = format!("{}/{{tenant-name}}/target", server.url());
        Self {
            server,
            server_template,
        }
    }

    /// Client bound to the mock server with the default test credentials.
    pub fn client(&self) -> TargetClient {
        TargetClient::builder()
            .tenant(TENANT)
            .api_key(API_KEY)
            .token(TOKEN)
            .server_url(&self.server_template)
            .build()
            .expect("test client")
    }

    /// Absolute path on the mock server for a path relative to the API root.
    pub fn path(relative: &str) -> String {
        format!("/{}/target{}", TENANT, relative)
    }
}

/// Transport that records every request and answers 200 with `{}`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("a request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(ApiResponse::from_bytes(200, HeaderMap::new(), b"{}"))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn recording_client() -> (TargetClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let client = TargetClient::builder()
        .tenant(TENANT)
        .api_key(API_KEY)
        .token(TOKEN)
        .server_url("https://mc.adobe.io/{tenant-name}/target")
        .transport(transport.clone())
        .build()
        .expect("test client");
    (client, transport)
}

pub const ID: i64 = 123;
pub const MBOX: &str = "home page";

pub fn sample_body() -> Value {
    json!({"name": "sample"})
}

pub fn sample_batch() -> BatchRequest {
    BatchRequest::new().operation(BatchOperation::new(1, "GET", "/target/activities"))
}

/// Call the typed method for `op` with fixed sample arguments.
pub async fn invoke(
    client: &TargetClient,
    op: Operation,
    options: CallOptions,
) -> target_sdk::Result<ApiResponse> {
    let body = sample_body();
    let list = ListOptions {
        call: options.clone(),
        ..ListOptions::default()
    };
    match op {
        Operation::GetActivities => client.get_activities(list).await,
        Operation::CreateAbActivity => client.create_ab_activity(&body, options).await,
        Operation::CreateXtActivity => client.create_xt_activity(&body, options).await,
        Operation::GetAbActivityById => client.get_ab_activity_by_id(ID, options).await,
        Operation::GetXtActivityById => client.get_xt_activity_by_id(ID, options).await,
        Operation::UpdateAbActivity => client.update_ab_activity(ID, &body, options).await,
        Operation::UpdateXtActivity => client.update_xt_activity(ID, &body, options).await,
        Operation::SetActivityName => client.set_activity_name(ID, "renamed", options).await,
        Operation::SetActivityState => client.set_activity_state(ID, "approved", options).await,
        Operation::SetActivityPriority => client.set_activity_priority(ID, 10, options).await,
        Operation::SetActivitySchedule => {
            let schedule = json!({"startsAt": "2026-01-01T00:00Z", "endsAt": "2026-02-01T00:00Z"});
            client.set_activity_schedule(ID, &schedule, options).await
        }
        Operation::DeleteAbActivity => client.delete_ab_activity(ID, options).await,
        Operation::DeleteXtActivity => client.delete_xt_activity(ID, options).await,
        Operation::GetActivityChangeLog => client.get_activity_change_log(ID, options).await,
        Operation::GetOffers => client.get_offers(list).await,
        Operation::GetOfferById => client.get_offer_by_id(ID, options).await,
        Operation::CreateOffer => client.create_offer(&body, options).await,
        Operation::UpdateOffer => client.update_offer(ID, &body, options).await,
        Operation::DeleteOffer => client.delete_offer(ID, options).await,
        Operation::GetAudiences => client.get_audiences(list).await,
        Operation::CreateAudience => client.create_audience(&body, options).await,
        Operation::GetAudienceById => client.get_audience_by_id(ID, options).await,
        Operation::UpdateAudience => client.update_audience(ID, &body, options).await,
        Operation::DeleteAudience => client.delete_audience(ID, options).await,
        Operation::GetProperties => client.get_properties(options).await,
        Operation::GetPropertyById => client.get_property_by_id(ID, options).await,
        Operation::GetMboxes => client.get_mboxes(options).await,
        Operation::GetMboxByName => client.get_mbox_by_name(MBOX, options).await,
        Operation::GetMboxProfileAttributes => client.get_mbox_profile_attributes(options).await,
        Operation::GetEnvironments => client.get_environments(options).await,
        Operation::GetAbActivityPerformance => client.get_ab_activity_performance(ID, options).await,
        Operation::GetXtActivityPerformance => client.get_xt_activity_performance(ID, options).await,
        Operation::GetActivityPerformance => client.get_activity_performance(ID, options).await,
        Operation::GetOrdersReport => client.get_orders_report(ID, options).await,
        Operation::ExecuteBatch => client.execute_batch(&sample_batch(), options).await,
    }
}

/// Expected wire shape of `invoke(op)`: verb, path below the API root, and
/// API version of the media type.
pub fn expected(op: Operation) -> (&'static str, &'static str, u8) {
    match op {
        Operation::GetActivities => ("GET", "/activities", 3),
        Operation::CreateAbActivity => ("POST", "/activities/ab", 3),
        Operation::CreateXtActivity => ("POST", "/activities/xt", 3),
        Operation::GetAbActivityById => ("GET", "/activities/ab/123", 3),
        Operation::GetXtActivityById => ("GET", "/activities/xt/123", 3),
        Operation::UpdateAbActivity => ("PUT", "/activities/ab/123", 3),
        Operation::UpdateXtActivity => ("PUT", "/activities/xt/123", 3),
        Operation::SetActivityName => ("PUT", "/activities/123/name", 1),
        Operation::SetActivityState => ("PUT", "/activities/123/state", 1),
        Operation::SetActivityPriority => ("PUT", "/activities/123/priority", 1),
        Operation::SetActivitySchedule => ("PUT", "/activities/123/schedule", 1),
        Operation::DeleteAbActivity => ("DELETE", "/activities/ab/123", 3),
        Operation::DeleteXtActivity => ("DELETE", "/activities/xt/123", 3),
        Operation::GetActivityChangeLog => ("GET", "/activities/123/changelog", 1),
        Operation::GetOffers => ("GET", "/offers", 2),
        Operation::GetOfferById => ("GET", "/offers/content/123", 2),
        Operation::CreateOffer => ("POST", "/offers/content", 2),
        Operation::UpdateOffer => ("PUT", "/offers/content/123", 2),
        Operation::DeleteOffer => ("DELETE", "/offers/content/123", 2),
        Operation::GetAudiences => ("GET", "/audiences", 3),
        Operation::CreateAudience => ("POST", "/audiences", 3),
        Operation::GetAudienceById => ("GET", "/audiences/123", 3),
        Operation::UpdateAudience => ("PUT", "/audiences/123", 3),
        Operation::DeleteAudience => ("DELETE", "/audiences/123", 3),
        Operation::GetProperties => ("GET", "/properties", 2),
        Operation::GetPropertyById => ("GET", "/properties/123", 2),
        Operation::GetMboxes => ("GET", "/mboxes", 2),
        Operation::GetMboxByName => ("GET", "/mbox/home%20page", 2),
        Operation::GetMboxProfileAttributes => ("GET", "/profileattributes/mbox", 2),
        Operation::GetEnvironments => ("GET", "/environments", 1),
        Operation::GetAbActivityPerformance => ("GET", "/activities/ab/123/report/performance", 1),
        Operation::GetXtActivityPerformance => ("GET", "/activities/xt/123/report/performance", 1),
        Operation::GetActivityPerformance => ("GET", "/activities/abt/123/report/performance", 1),
        Operation::GetOrdersReport => ("GET", "/activities/ab/123/report/orders", 1),
        Operation::ExecuteBatch => ("POST", "/batch", 1),
    }
}

pub fn media_type(version: u8) -> String {
    format!("application/vnd.adobe.target.v{}+json", version)
}
