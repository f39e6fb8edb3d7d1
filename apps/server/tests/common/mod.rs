#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{HeaderMap, Request, StatusCode, Uri},
    Router,
};
use cryptodash_market_data::AlpacaCredentials;
use cryptodash_server::{
    api::app_router,
    build_state_with_client,
    config::{Config, UpstreamConfig},
};
use tower::ServiceExt;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path_and_query: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

/// Stand-in for the upstream provider: answers every path with a fixed
/// status and body, and records what it was asked.
#[derive(Clone)]
pub struct FakeUpstream {
    pub base_url: String,
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    pub async fn spawn(status: StatusCode, body: &str) -> Self {
        Self::spawn_delayed(status, body, Duration::ZERO).await
    }

    /// Like [`FakeUpstream::spawn`], but waits `delay` before answering.
    pub async fn spawn_delayed(status: StatusCode, body: &str, delay: Duration) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let upstream = FakeUpstream {
            base_url: format!("http://{}", addr),
            status,
            body: body.to_string(),
            delay,
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new().fallback(record).with_state(upstream.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        upstream
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn record(
    State(upstream): State<FakeUpstream>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    upstream.requests.lock().unwrap().push(RecordedRequest {
        path_and_query: uri
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_default(),
        api_key: header("APCA-API-KEY-ID"),
        api_secret: header("APCA-API-SECRET-KEY"),
    });
    if !upstream.delay.is_zero() {
        tokio::time::sleep(upstream.delay).await;
    }
    (upstream.status, upstream.body.clone())
}

pub fn test_config(base_url: &str, credentials: Option<AlpacaCredentials>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(10),
        static_dir: None,
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            credentials,
        },
    }
}

pub fn credentials() -> Option<AlpacaCredentials> {
    Some(AlpacaCredentials::new("key-id", "secret"))
}

pub fn build_router(config: &Config) -> Router {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let state = build_state_with_client(config, client);
    app_router(state, config)
}

/// Router wired to `upstream` with valid credentials.
pub fn router_for(upstream: &FakeUpstream) -> Router {
    build_router(&test_config(&upstream.base_url, credentials()))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
