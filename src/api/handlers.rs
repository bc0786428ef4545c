use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::types::*;
use crate::error::{ApiContext, ApiError};
use crate::wallet::WalletManager;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn wallet_exists_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<WalletExistsResponse> {
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let presence = manager.wallet_presence(&user);

    Json(WalletExistsResponse {
        exists: presence.exists,
        address: presence.address,
    })
}

pub async fn create_wallet_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<WalletAddressResponse>, ApiError> {
    const FAILURE: &str = "Failed to create wallet";

    let req: CreateWalletRequest = parse_body(&body).api_context(FAILURE)?;
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let wallet = manager.create_wallet(&user, req.pin);

    Ok(Json(WalletAddressResponse {
        success: true,
        address: wallet.address,
    }))
}

pub async fn import_wallet_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<WalletAddressResponse>, ApiError> {
    const FAILURE: &str = "Failed to import wallet";

    let req: ImportWalletRequest = parse_body(&body).api_context(FAILURE)?;
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let wallet = manager.import_wallet(&user, &req.seed_phrase, req.pin);

    Ok(Json(WalletAddressResponse {
        success: true,
        address: wallet.address,
    }))
}

pub async fn get_balance_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let balance = manager
        .get_balance(&user)
        .api_context("Failed to get wallet balance")?;

    Ok(Json(BalanceResponse {
        success: true,
        balance,
    }))
}

pub async fn get_transactions_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let transactions = manager
        .list_transactions(&user)
        .api_context("Failed to get transaction history")?;

    Ok(Json(TransactionsResponse {
        success: true,
        transactions,
    }))
}

pub async fn get_badges_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<BadgesResponse>, ApiError> {
    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let badges = manager
        .list_badges(&user)
        .api_context("Failed to get NFT badges")?;

    Ok(Json(BadgesResponse {
        success: true,
        badges,
    }))
}

pub async fn create_token_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    const FAILURE: &str = "Failed to create token";

    let req: CreateTokenRequest = parse_body(&body).api_context(FAILURE)?;
    req.validate().api_context(FAILURE)?;

    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let token = manager
        .create_token(&user, req.name, req.symbol, req.supply, req.image_url)
        .api_context(FAILURE)?;

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

pub async fn send_tokens_handler(
    State(manager): State<Arc<WalletManager>>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<SendTokensResponse>, ApiError> {
    const FAILURE: &str = "Failed to send tokens";

    let req: SendTokensRequest = parse_body(&body).api_context(FAILURE)?;
    req.validate().api_context(FAILURE)?;

    let user = manager.resolve_user(UserQuery::from(params).telegram_id);
    let transaction = manager
        .send_tokens(&user, req.recipient, req.amount, req.token_symbol)
        .api_context(FAILURE)?;

    Ok(Json(SendTokensResponse {
        success: true,
        transaction,
    }))
}
