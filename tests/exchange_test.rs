use chrono::Utc;
use serde_json::json;
use spomix::error::Error;
use spomix::spotify::{ExchangeClient, ProxyStyle};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper function to build the proxy's success payload
fn token_body() -> serde_json::Value {
    json!({
        "access_token": "BQCaccess",
        "refresh_token": "AQCrefresh",
        "expires_in": 3600,
        "token_type": "Bearer",
        "scope": "user-read-private"
    })
}

#[tokio::test]
async fn test_exchange_code_posts_json_body() {
    let proxy = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({
            "code": "AQCcode",
            "redirectUri": "http://127.0.0.1:8888/callback"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ExchangeClient::new(proxy.uri(), ProxyStyle::JsonPost);

    let before = Utc::now().timestamp();
    let credential = client
        .exchange_code("AQCcode", "http://127.0.0.1:8888/callback")
        .await
        .unwrap();
    let after = Utc::now().timestamp();

    assert_eq!(credential.access_token, "BQCaccess");
    assert_eq!(credential.refresh_token.as_deref(), Some("AQCrefresh"));

    // Expiry is anchored to the receipt time, not to the epoch
    assert!(credential.expires_at >= before + 3600);
    assert!(credential.expires_at <= after + 3600);

    // The request carries no provider credentials of its own
    let requests = proxy.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_refresh_posts_only_the_refresh_token() {
    let proxy = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({ "refresh_token": "AQCrefresh" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ExchangeClient::new(proxy.uri(), ProxyStyle::JsonPost);
    let credential = client.refresh("AQCrefresh").await.unwrap();

    assert_eq!(credential.access_token, "BQCaccess");
    assert!(credential.is_valid());
}

#[tokio::test]
async fn test_exchange_code_with_query_convention() {
    let proxy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("code", "AQCcode"))
        .and(query_param("redirectUri", "http://127.0.0.1:8888/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ExchangeClient::new(proxy.uri(), ProxyStyle::QueryGet);
    let credential = client
        .exchange_code("AQCcode", "http://127.0.0.1:8888/callback")
        .await
        .unwrap();

    assert_eq!(credential.access_token, "BQCaccess");
}

#[tokio::test]
async fn test_refresh_with_query_convention() {
    let proxy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("refresh_token", "AQCrefresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ExchangeClient::new(proxy.uri(), ProxyStyle::QueryGet);
    let credential = client.refresh("AQCrefresh").await.unwrap();

    assert_eq!(credential.access_token, "BQCaccess");
}

#[tokio::test]
async fn test_exchange_failure_carries_status_and_body() {
    let proxy = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .expect(1)
        .mount(&proxy)
        .await;

    let client = ExchangeClient::new(proxy.uri(), ProxyStyle::JsonPost);
    let err = client
        .exchange_code("expired-code", "http://127.0.0.1:8888/callback")
        .await
        .unwrap_err();

    match err {
        Error::ExchangeFailed { status, body } => {
            assert_eq!(status, 400);
            // The proxy body is preserved verbatim for diagnostics
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected ExchangeFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_proxy_is_a_transport_error() {
    // An exclusive (non-pooled) server so the listener actually closes on drop
    let proxy = MockServer::builder().start().await;
    let endpoint = proxy.uri();
    drop(proxy);

    let client = ExchangeClient::new(endpoint, ProxyStyle::JsonPost);
    let err = client
        .exchange_code("AQCcode", "http://127.0.0.1:8888/callback")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn test_proxy_style_parsing() {
    assert_eq!("json_post".parse::<ProxyStyle>().unwrap(), ProxyStyle::JsonPost);
    assert_eq!("query_get".parse::<ProxyStyle>().unwrap(), ProxyStyle::QueryGet);

    // Unknown styles are rejected rather than silently defaulted
    assert!("form_put".parse::<ProxyStyle>().is_err());
}
