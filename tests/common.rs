/// Common test utilities for wallet API integration tests
///
/// Builds the router over a fresh in-memory registry and drives it
/// in-process, without binding a socket.
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use hathor_tg_wallet::{api::server::create_router, ServerConfig, WalletManager};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestEnvironment {
    pub manager: Arc<WalletManager>,
    router: Router,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        init_logging();

        let manager = Arc::new(WalletManager::new(config));
        let router = create_router(manager.clone());

        Self { manager, router }
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::get(uri).body(Body::empty())?;
        self.send_json(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))?;
        self.send_json(request).await
    }

    pub async fn get_text(&self, uri: &str) -> anyhow::Result<(StatusCode, String)> {
        let request = Request::get(uri).body(Body::empty())?;
        let (status, bytes) = self.send(request).await?;
        Ok((status, String::from_utf8(bytes)?))
    }

    async fn send_json(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let (status, bytes) = self.send(request).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    async fn send(&self, request: Request<Body>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }
}

pub fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// Assert the generic failure envelope
pub fn assert_failure(status: StatusCode, body: &Value, message: &str) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], message);
}
