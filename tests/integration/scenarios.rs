//! End-to-end flows against a mock Target server.

use super::mock_server::MockServerFixture;
use futures::future::join_all;
use mockito::Matcher;
use serde_json::json;
use target_sdk::{
    init, BatchOperation, BatchRequest, CallOptions, Error, ErrorCode, ListOptions, TargetClient,
};

#[tokio::test]
async fn initialization_lists_every_missing_credential() {
    let cases: [(&str, &str, &str, &[&str]); 7] = [
        ("", "k", "tok", &["tenant"]),
        ("t", "", "tok", &["apiKey"]),
        ("t", "k", "", &["token"]),
        ("", "", "tok", &["tenant", "apiKey"]),
        ("", "k", "", &["tenant", "token"]),
        ("t", "", "", &["apiKey", "token"]),
        ("", "", "", &["tenant", "apiKey", "token"]),
    ];

    for (tenant, api_key, token, missing) in cases {
        let err = init(tenant, api_key, token).await.unwrap_err();
        assert!(matches!(err, Error::Initialization { .. }));
        assert_eq!(err.code(), Some(ErrorCode::SdkInitialization));
        assert_eq!(err.missing_arguments(), Some(missing));
        assert_eq!(
            err.to_string(),
            format!(
                "[TargetSDK:ERROR_SDK_INITIALIZATION] SDK initialization error(s). Missing arguments: {}",
                missing.join(", ")
            )
        );
    }
}

#[tokio::test]
async fn init_binds_credentials() {
    let client = init("t", "k", "tok").await.unwrap();
    assert_eq!(client.tenant(), "t");
    assert_eq!(client.api_key(), "k");
    assert_eq!(client.token(), "tok");
}

#[tokio::test]
async fn list_activities() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/activities").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2147483647".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/vnd.adobe.target.v3+json")
        .with_body(
            json!({
                "total": 2,
                "offset": 0,
                "limit": 10,
                "activities": [
                    {"id": 1, "type": "ab", "name": "first"},
                    {"id": 2, "type": "xt", "name": "second"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let resp = fixture
        .client()
        .get_activities(ListOptions::default())
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.header("content-type"),
        Some("application/vnd.adobe.target.v3+json")
    );
    assert_eq!(resp.body["total"], 2);
    assert_eq!(resp.body["limit"], 10);
    assert_eq!(resp.body["activities"].as_array().unwrap().len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_ab_activity() {
    let mut fixture = MockServerFixture::new().await;
    let activity = json!({
        "name": "homepage test",
        "state": "saved",
        "options": [{"offerId": 1}],
        "locations": {"mboxes": [{"name": "home"}]}
    });
    let mock = fixture
        .server
        .mock("POST", MockServerFixture::path("/activities/ab").as_str())
        .match_body(Matcher::Json(activity.clone()))
        .with_status(200)
        .with_body(r#"{"id":123,"name":"homepage test","state":"saved"}"#)
        .create_async()
        .await;

    let resp = fixture
        .client()
        .create_ab_activity(&activity, CallOptions::default())
        .await
        .unwrap();

    assert_eq!(resp.body["id"], 123);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_missing_ab_activity() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/activities/ab/123").as_str())
        .with_status(404)
        .with_body(r#"{"errors":[{"errorCode":"NotFound","message":"Activity not found"}]}"#)
        .create_async()
        .await;

    let err = fixture
        .client()
        .get_ab_activity_by_id(123, CallOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::GetAbActivityById));
    assert_eq!(err.status(), Some(404));
    let context = err.context().unwrap();
    assert_eq!(context.param("id"), Some(&json!(123)));
    assert!(err.to_string().contains("Activity not found"));
}

#[tokio::test]
async fn execute_batch() {
    let mut fixture = MockServerFixture::new().await;
    let batch = BatchRequest::new()
        .operation(BatchOperation::new(1, "POST", "/v1/offers/content").body(json!({"name": "o"})))
        .operation(
            BatchOperation::new(2, "DELETE", "/v1/offers/content/1")
                .depends_on([1])
                .header("x-trace", "abc"),
        );
    let mock = fixture
        .server
        .mock("POST", MockServerFixture::path("/batch").as_str())
        .match_header("content-type", "application/vnd.adobe.target.v1+json")
        .match_body(Matcher::Json(json!({
            "operations": [
                {"operationId": 1, "method": "POST", "relativeUrl": "/v1/offers/content", "body": {"name": "o"}},
                {
                    "operationId": 2,
                    "dependsOnOperationIds": [1],
                    "method": "DELETE",
                    "relativeUrl": "/v1/offers/content/1",
                    "headers": [{"name": "x-trace", "value": "abc"}]
                }
            ]
        })))
        .with_status(200)
        .with_body(r#"{"results":[{"operationId":1,"statusCode":200}]}"#)
        .create_async()
        .await;

    let resp = fixture
        .client()
        .execute_batch(&batch, CallOptions::default())
        .await
        .unwrap();

    assert_eq!(resp.body["results"].as_array().unwrap().len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_returns_empty_body_as_null() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("DELETE", MockServerFixture::path("/offers/content/5").as_str())
        .with_status(204)
        .create_async()
        .await;

    let resp = fixture
        .client()
        .delete_offer(5, CallOptions::default())
        .await
        .unwrap();
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_null());
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/activities/xt/42").as_str())
        .with_status(200)
        .with_body(r#"{"id":42,"name":"xt","state":"approved"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = fixture.client();
    let first = client.get_xt_activity_by_id(42, CallOptions::default()).await.unwrap();
    let second = client.get_xt_activity_by_id(42, CallOptions::default()).await.unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let mut fixture = MockServerFixture::new().await;
    let _ok = fixture
        .server
        .mock("GET", Matcher::Regex(r"/offers/content/1[0124-9]$".into()))
        .with_status(200)
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;
    let _missing = fixture
        .server
        .mock("GET", MockServerFixture::path("/offers/content/13").as_str())
        .with_status(404)
        .create_async()
        .await;

    let client: TargetClient = fixture.client();
    let calls = (10..20).map(|id| {
        let client = client.clone();
        async move { (id, client.get_offer_by_id(id, CallOptions::default()).await) }
    });
    let results = join_all(calls).await;

    for (id, result) in results {
        if id == 13 {
            assert_eq!(result.unwrap_err().code(), Some(ErrorCode::GetOfferById));
        } else {
            assert_eq!(result.unwrap().status, 200, "offer {}", id);
        }
    }
}
