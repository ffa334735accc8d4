//! Shared setup for the HTTP integration tests: an in-memory store seeded
//! with the demo household, wired to the real router.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use weekbasket::config::{Config, FeatureConfig, ObservabilityConfig, ServerConfig};
use weekbasket::demo::{seed_demo_data, DemoSeed};
use weekbasket::routes::AppState;
use weekbasket_grocery::MemoryStore;

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub seed: DemoSeed,
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> anyhow::Result<Response> {
        Ok(self.router.clone().oneshot(request).await?)
    }
}

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        observability: ObservabilityConfig::default(),
        features: FeatureConfig::default(),
    }
}

pub fn setup_demo_app() -> TestApp {
    let store = MemoryStore::new();
    let seed = seed_demo_data(&store);
    let state = AppState {
        config: create_test_config(),
        grocery: store.service(),
    };

    TestApp {
        router: weekbasket::routes::router(state),
        store,
        seed,
    }
}

/// Monday of the week [`seed_demo_data`] plans.
pub fn demo_week_start() -> time::Date {
    let today = time::OffsetDateTime::now_utc().date();
    today - time::Duration::days(i64::from(today.weekday().number_days_from_monday()))
}

pub fn plain_get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

pub fn authed_get(uri: &str, user: Uuid, household: Option<Uuid>) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder().uri(uri).header("x-user-id", user.to_string());
    if let Some(household) = household {
        builder = builder.header("x-household-id", household.to_string());
    }
    Ok(builder.body(Body::empty())?)
}

pub fn authed_json(
    method: Method,
    uri: &str,
    user: Uuid,
    household: Option<Uuid>,
    body: &serde_json::Value,
) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-user-id", user.to_string());
    if let Some(household) = household {
        builder = builder.header("x-household-id", household.to_string());
    }
    Ok(builder.body(Body::from(body.to_string()))?)
}

pub async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}
