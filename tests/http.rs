use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_rs::{ApiRequest, Auth, Config, Endpoint, HttpTransport, Method, Transport, Video, YtError};

async fn transport(server: &MockServer) -> HttpTransport {
    let config = Config::default()
        .with_data_api_url(&server.uri())
        .unwrap()
        .with_analytics_api_url(&format!("{}/v2", server.uri()))
        .unwrap()
        .with_api_key("api-key");
    HttpTransport::new(config).unwrap()
}

#[tokio::test]
async fn sends_bearer_token_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "MESycYJytkU"))
        .and(query_param("part", "snippet"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get(Endpoint::Data, "videos")
        .query("id", "MESycYJytkU")
        .query("part", "snippet")
        .auth(&Auth::new("token"));
    let body = transport(&server).await.send(request).await.unwrap();
    assert_eq!(body, r#"{"items":[]}"#);
}

#[tokio::test]
async fn uses_api_key_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("key", "api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get(Endpoint::Data, "videos").auth(&Auth::anonymous());
    transport(&server).await.send(request).await.unwrap();
}

#[tokio::test]
async fn routes_analytics_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get(Endpoint::Analytics, "reports").authorized(&Auth::new("token"));
    transport(&server).await.send(request).await.unwrap();
}

#[tokio::test]
async fn forbidden_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let request = ApiRequest::new(Method::DELETE, Endpoint::Data, "videos")
        .query("id", "MESycYJytkU")
        .authorized(&Auth::new("token"));
    let err = transport(&server).await.send(request).await.unwrap_err();
    assert!(matches!(err, YtError::Unauthorized(body) if body == "forbidden"));
}

#[tokio::test]
async fn missing_token_never_reaches_the_service() {
    let server = MockServer::start().await;

    let request = ApiRequest::new(Method::POST, Endpoint::Data, "videos/rate")
        .authorized(&Auth::anonymous());
    let err = transport(&server).await.send(request).await.unwrap_err();
    assert!(matches!(err, YtError::Unauthorized(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn other_failures_keep_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&server)
        .await;

    let request = ApiRequest::get(Endpoint::Data, "videos");
    let err = transport(&server).await.send(request).await.unwrap_err();
    match err {
        YtError::IsNotSuccess { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "backend error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn video_like_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/videos/rate"))
        .and(query_param("id", "MESycYJytkU"))
        .and(query_param("rating", "like"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let transport = Arc::new(transport(&server).await);
    let mut video = Video::new("MESycYJytkU", Arc::new(Auth::new("token")), transport);
    assert!(video.like().await.unwrap());
}
