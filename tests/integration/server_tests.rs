use crate::common::{checker, closed_address, hardened_page, serve, PAGE_WITHOUT_DESCRIPTION};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use site_audit::server::{build_router, AppState};
use tower::ServiceExt;

fn router() -> Router {
    build_router(AppState { checker: checker() })
}

fn check_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(request).await;
    let json = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, json)
}

#[tokio::test]
async fn test_check_endpoint_returns_report() {
    let mock_server = serve("/", hardened_page(PAGE_WITHOUT_DESCRIPTION)).await;
    let body = serde_json::json!({ "url": mock_server.uri() }).to_string();

    let (status, json) = send_json(check_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["url"], mock_server.uri());
    assert_eq!(json["status"], "warning");
    assert_eq!(json["statusCode"], 200);
    assert_eq!(json["seoScore"], 85);
    assert_eq!(json["securityScore"], 70);
    assert_eq!(json["performanceScore"], 100);
    assert_eq!(json["issues"][0], "Missing meta description");
    assert!(json["responseTime"].is_u64());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_unreachable_target_is_still_ok() {
    let body = serde_json::json!({ "url": format!("http://{}", closed_address()) }).to_string();

    let (status, json) = send_json(check_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "error");
    assert_eq!(json["issues"].as_array().map(Vec::len), Some(1));
    assert!(json["issues"][0]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch website: "));
    assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(1));
    assert!(json.get("statusCode").is_none());
    assert!(json.get("responseTime").is_none());
    assert!(json.get("seoScore").is_none());
    assert!(json.get("performanceScore").is_none());
    assert!(json.get("securityScore").is_none());
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    for body in [r#"{}"#, r#"{"url": ""}"#, r#"{"url": "   "}"#, r#"{"url": null}"#] {
        let (status, json) = send_json(check_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json, serde_json::json!({ "error": "URL is required" }));
    }
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let (status, json) = send_json(check_request("not json at all")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_internal_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/check")
        .body(Body::from(r#"{"url": "example.com"}"#))
        .unwrap();

    let (status, json) = send_json(request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_index_serves_form() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, bytes) = send(request).await;
    let html = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<form"));
    assert!(html.contains("/api/check"));
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, json) = send_json(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_check_requires_post() {
    let request = Request::builder()
        .uri("/api/check")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
