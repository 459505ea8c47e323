use chrono::Utc;
use reqwest::Method;
use serde_json::json;
use spomix::error::Error;
use spomix::management::{MemoryTokenStore, TokenStore};
use spomix::spotify::Gateway;
use spomix::types::Credential;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper function to create a credential that is still usable
fn create_valid_credential() -> Credential {
    Credential {
        access_token: "BQCaccess".to_string(),
        refresh_token: Some("AQCrefresh".to_string()),
        expires_at: Utc::now().timestamp() + 3600,
    }
}

// Helper function to build a gateway whose store already holds a credential
async fn create_authenticated_gateway(api: &MockServer) -> (Gateway<MemoryTokenStore>, MemoryTokenStore) {
    let store = MemoryTokenStore::new();
    store.save(&create_valid_credential()).await.unwrap();
    (Gateway::with_api_url(store.clone(), api.uri()), store)
}

#[tokio::test]
async fn test_call_without_credential_makes_no_request() {
    let api = MockServer::start().await;

    // Nothing may reach the API
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api)
        .await;

    let gateway = Gateway::with_api_url(MemoryTokenStore::new(), api.uri());
    let url = format!("{}/me", api.uri());
    let err = gateway.call(Method::GET, &url, None).await.unwrap_err();

    assert!(matches!(err, Error::NotAuthenticated));
}

#[tokio::test]
async fn test_call_with_expired_credential_makes_no_request() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api)
        .await;

    let store = MemoryTokenStore::new();
    store
        .save(&Credential {
            access_token: "BQCstale".to_string(),
            refresh_token: Some("AQCrefresh".to_string()),
            expires_at: Utc::now().timestamp() - 60,
        })
        .await
        .unwrap();

    let gateway = Gateway::with_api_url(store.clone(), api.uri());
    let url = format!("{}/me", api.uri());
    let err = gateway.call(Method::GET, &url, None).await.unwrap_err();

    // Local expiry is not the same as an upstream rejection
    assert!(matches!(err, Error::NotAuthenticated));

    // The stale credential stays in place; its refresh token is still needed
    assert!(store.load().await.unwrap().is_some());
}

#[tokio::test]
async fn test_call_attaches_bearer_token() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer BQCaccess"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user1" })))
        .expect(1)
        .mount(&api)
        .await;

    let (gateway, _store) = create_authenticated_gateway(&api).await;
    let url = format!("{}/me", api.uri());
    let body = gateway.call(Method::GET, &url, None).await.unwrap();

    assert_eq!(body["id"], "user1");
}

#[tokio::test]
async fn test_call_forwards_json_body() {
    let api = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/playlists/p1/tracks"))
        .and(body_json(json!({ "uris": ["spotify:track:t1"] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "snap1" })))
        .expect(1)
        .mount(&api)
        .await;

    let (gateway, _store) = create_authenticated_gateway(&api).await;
    let url = format!("{}/playlists/p1/tracks", api.uri());
    let body = gateway
        .call(Method::POST, &url, Some(json!({ "uris": ["spotify:track:t1"] })))
        .await
        .unwrap();

    assert_eq!(body["snapshot_id"], "snap1");
}

#[tokio::test]
async fn test_unauthorized_clears_store_and_next_call_fails_fast() {
    let api = MockServer::start().await;

    // Exactly one request: the rejected one
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&api)
        .await;

    let (gateway, store) = create_authenticated_gateway(&api).await;
    let url = format!("{}/me", api.uri());

    let err = gateway.call(Method::GET, &url, None).await.unwrap_err();
    assert!(matches!(err, Error::AuthenticationExpired));

    // The rejected credential is gone
    assert!(store.load().await.unwrap().is_none());

    // A second call fails before any request is sent
    let err = gateway.call(Method::GET, &url, None).await.unwrap_err();
    assert!(matches!(err, Error::NotAuthenticated));
}

#[tokio::test]
async fn test_other_failures_keep_the_credential() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&api)
        .await;

    let (gateway, store) = create_authenticated_gateway(&api).await;
    let url = format!("{}/me", api.uri());

    let err = gateway.call(Method::GET, &url, None).await.unwrap_err();
    match err {
        Error::RequestFailed { status } => assert_eq!(status, 500),
        other => panic!("expected RequestFailed, got {other:?}"),
    }

    // A server-side failure does not invalidate the session
    assert!(store.load().await.unwrap().is_some());
}
