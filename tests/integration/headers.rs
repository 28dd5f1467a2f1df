//! Header negotiation and credential injection.

use super::mock_server::{recording_client, MockServerFixture, API_KEY, TOKEN};
use mockito::Matcher;
use target_sdk::{CallOptions, ListOptions, MediaProfile};

#[tokio::test]
async fn credentials_are_sent_on_every_call() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/properties").as_str())
        .match_header("x-api-key", API_KEY)
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let resp = fixture
        .client()
        .get_properties(CallOptions::default())
        .await
        .unwrap();
    assert!(resp.body.as_array().unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn explicit_credentials_are_not_clobbered() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/environments").as_str())
        .match_header("x-api-key", "debug-key")
        .match_header("authorization", "Bearer debug-token")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let options = CallOptions::new()
        .header("X-Api-Key", "debug-key")
        .header("Authorization", "Bearer debug-token");
    fixture.client().get_environments(options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn accept_override_replaces_only_accept() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", MockServerFixture::path("/activities/ab").as_str())
        .match_header("accept", "application/vnd.adobe.target.v1+json")
        .match_header("content-type", "application/vnd.adobe.target.v3+json")
        .with_status(200)
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;

    fixture
        .client()
        .create_ab_activity(
            &serde_json::json!({"name": "a"}),
            CallOptions::new().accept(MediaProfile::V1),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn content_type_override_is_sent_verbatim() {
    let (client, transport) = recording_client();
    client
        .update_offer(
            7,
            &serde_json::json!({"content": "<p>hi</p>"}),
            CallOptions::new().header("content-type", "application/vnd.adobe.target.v1+json"),
        )
        .await
        .unwrap();

    let req = transport.last();
    assert_eq!(req.headers.get_all("content-type").iter().count(), 1);
    assert_eq!(req.headers["content-type"], "application/vnd.adobe.target.v1+json");
    assert_eq!(req.headers["accept"], "application/vnd.adobe.target.v2+json");
}

#[tokio::test]
async fn list_override_headers_travel_with_pagination() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", MockServerFixture::path("/audiences").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
            Matcher::UrlEncoded("sortBy".into(), "name".into()),
        ]))
        .match_header("accept", "application/vnd.adobe.target.v2+json")
        .with_status(200)
        .with_body(r#"{"audiences":[]}"#)
        .create_async()
        .await;

    let options = ListOptions::new()
        .limit(5)
        .offset(10)
        .sort_by("name")
        .accept(MediaProfile::V2);
    fixture.client().get_audiences(options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_override_fails_before_sending() {
    let (client, transport) = recording_client();
    let err = client
        .get_mboxes(CallOptions::new().header("bad header", "x"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(target_sdk::ErrorCode::GetMboxes));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn repeated_override_sends_one_value() {
    let (client, transport) = recording_client();
    let options = CallOptions::new()
        .header("Accept", "application/vnd.adobe.target.v2+json")
        .header("accept", "application/vnd.adobe.target.v3+json")
        .header("x-api-key", "a")
        .header("X-Api-Key", "b");
    client.get_environments(options).await.unwrap();

    let req = transport.last();
    for name in ["accept", "x-api-key", "authorization", "content-type"] {
        assert_eq!(req.headers.get_all(name).iter().count(), 1, "{}", name);
    }
    assert_eq!(req.headers["accept"], "application/vnd.adobe.target.v3+json");
    assert_eq!(req.headers["x-api-key"], "b");
}

#[tokio::test]
async fn tenant_is_confined_to_its_path_segment() {
    let transport = std::sync::Arc::new(super::mock_server::RecordingTransport::default());
    let client = target_sdk::TargetClient::builder()
        .tenant("acme?x=1")
        .api_key(API_KEY)
        .token(TOKEN)
        .server_url("https://mc.adobe.io/{tenant-name}/target")
        .transport(transport.clone())
        .build()
        .unwrap();
    client.get_environments(CallOptions::default()).await.unwrap();

    let req = transport.last();
    assert_eq!(req.url.path(), "/acme%3Fx%3D1/target/environments");
    assert_eq!(req.url.query(), None);
}
