use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::ServerConfig;
use crate::wallet::WalletManager;

pub fn create_router(wallet_manager: Arc<WalletManager>) -> Router {
    let cors = cors_layer(&wallet_manager.config);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Wallet routes
        .route("/api/wallet/exists", get(handlers::wallet_exists_handler))
        .route("/api/wallet/create", post(handlers::create_wallet_handler))
        .route("/api/wallet/import", post(handlers::import_wallet_handler))
        .route("/api/wallet/balance", get(handlers::get_balance_handler))
        .route(
            "/api/wallet/transactions",
            get(handlers::get_transactions_handler),
        )
        .route("/api/wallet/nft-badges", get(handlers::get_badges_handler))
        .route("/api/wallet/send", post(handlers::send_tokens_handler))
        // Token routes
        .route("/api/token/create", post(handlers::create_token_handler))
        .with_state(wallet_manager)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Set ALLOWED_ORIGINS="https://your-mini-app.example" for production.
/// If not set, allows any origin (development mode).
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match &config.allowed_origins {
        Some(origins) => {
            log::info!("CORS configured for {} origin(s)", origins.len());
            AllowOrigin::list(origins.iter().cloned())
        }
        None => {
            log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
            AllowOrigin::from(Any)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_address.clone();
    let wallet_manager = Arc::new(WalletManager::new(config));
    let app = create_router(wallet_manager);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())?.recv().await;
        Ok::<_, std::io::Error>(())
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    let result = tokio::select! {
        r = tokio::signal::ctrl_c() => r,
        r = terminate => r,
    };

    match result {
        Ok(()) => log::info!("Shutting down; in-memory wallets are discarded"),
        Err(e) => log::error!("Signal listener failed, shutting down: {}", e),
    }
}
