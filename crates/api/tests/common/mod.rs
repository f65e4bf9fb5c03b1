#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use spycat_api::config::ServerConfig;
use spycat_api::router::build_app_router;
use spycat_api::state::AppState;
use spycat_core::breed::{BreedLookupError, BreedOracle};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        breed_api_url: "http://127.0.0.1:9/breeds".to_string(),
        breed_api_timeout_secs: 1,
    }
}

/// Breed oracle answering from a fixed list, or failing on every call.
pub struct StubBreeds {
    names: Option<Vec<String>>,
}

impl StubBreeds {
    pub fn known(names: &[&str]) -> Self {
        Self {
            names: Some(names.iter().map(|n| n.to_string()).collect()),
        }
    }

    pub fn unreachable() -> Self {
        Self { names: None }
    }
}

#[async_trait]
impl BreedOracle for StubBreeds {
    async fn breed_names(&self) -> Result<Vec<String>, BreedLookupError> {
        self.names
            .clone()
            .ok_or_else(|| BreedLookupError::Unreachable("connection refused".into()))
    }
}

/// Build the full application router with the default stub breed list.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_oracle(
        pool,
        StubBreeds::known(&["Siamese", "Persian", "Maine Coon", "Bengal"]),
    )
}

/// Build the full application router around `oracle`.
///
/// Uses the same middleware stack as `main.rs`.
pub fn build_test_app_with_oracle(pool: PgPool, oracle: impl BreedOracle + 'static) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        breeds: Arc::new(oracle),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn cat_payload(name: &str) -> Value {
    json!({
        "name": name,
        "years_of_experience": 3,
        "breed": "Siamese",
        "salary": 1500.0,
    })
}

pub fn target_payload(name: &str) -> Value {
    json!({ "name": name, "country": "France", "notes": "" })
}

/// Create a cat through the API and return its id.
pub async fn create_cat(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/cats", cat_payload(name)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a mission with `target_count` targets and return its JSON.
pub async fn create_mission(pool: &PgPool, cat: Option<i64>, target_count: usize) -> Value {
    let targets: Vec<Value> = (0..target_count)
        .map(|i| target_payload(&format!("Target {i}")))
        .collect();
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/missions",
        json!({ "cat": cat, "targets": targets }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await
}
