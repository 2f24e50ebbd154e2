#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use packetbase_api::config::ServerConfig;
use packetbase_api::router::build_app_router;
use packetbase_api::state::AppState;

/// An address nothing listens on, for upstream-down scenarios.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` pointing at the given upstream base URLs.
///
/// CORS is fully open and no request timeout is installed, matching the
/// production defaults.
pub fn test_config(ml_api_url: &str, db_api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ml_api_url: ml_api_url.to_string(),
        db_api_url: db_api_url.to_string(),
        cors_origins: Vec::new(),
        request_timeout_secs: None,
        max_upload_bytes: 16 * 1024 * 1024,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(ml_api_url: &str, db_api_url: &str) -> Router {
    build_app_router(AppState::new(test_config(ml_api_url, db_api_url)))
}

/// Build an app from a custom config.
pub fn build_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// Used as a stub upstream when a test has to inspect the request body.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a single-file multipart form.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    const BOUNDARY: &str = "packetbase-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}
