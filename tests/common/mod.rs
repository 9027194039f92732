use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use taskgrid::config::cors::CorsConfig;
use taskgrid::config::jwt::JwtConfig;
use taskgrid::router::init_router;
use taskgrid::state::AppState;
use taskgrid::store::InMemoryUserStore;
use tower::ServiceExt;

/// Passphrase that clears the zxcvbn strength bar.
#[allow(dead_code)]
pub const STRONG_PASSWORD: &str = "correct-horse-battery-staple";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        issuer: "taskgrid".to_string(),
        expiry_secs: 3600,
    }
}

/// Builds the full router over a fresh in-memory store. The store handle is
/// returned so tests can inspect persisted state directly.
pub fn setup_test_app() -> (Arc<InMemoryUserStore>, Router) {
    let store = Arc::new(InMemoryUserStore::new());
    let state = AppState::new(
        store.clone(),
        &test_jwt_config(),
        CorsConfig {
            allowed_origins: vec![],
        },
    );

    (store, init_router(state))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn register(app: &Router, username: &str, password: &str) -> Response {
    send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({ "username": username, "password": password }),
        ),
    )
    .await
}

/// Extracts the `name=value` pair from the response's `Set-Cookie` header,
/// ready to be sent back in a `Cookie` header.
#[allow(dead_code)]
pub fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.to_string())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
