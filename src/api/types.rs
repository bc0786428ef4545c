use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::WalletError;
use crate::wallet::types::{Badge, TokenBalance, Transaction, WalletBalance};

pub const MIN_TOKEN_SUPPLY: f64 = 1.0;
pub const MIN_SEND_AMOUNT: f64 = 0.000001;

/// Parse a JSON request body; an empty body reads as `{}`
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, WalletError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(body).map_err(|e| WalletError::InvalidRequest(e.to_string()))
}

/// Query parameters identifying the Telegram user.
///
/// Built from raw pairs so repeated or odd parameters never reject the
/// request; the first `telegram_id` wins.
#[derive(Debug, Default)]
pub struct UserQuery {
    pub telegram_id: Option<String>,
}

impl From<Vec<(String, String)>> for UserQuery {
    fn from(params: Vec<(String, String)>) -> Self {
        let telegram_id = params
            .into_iter()
            .find(|(key, _)| key == "telegram_id")
            .map(|(_, value)| value);

        Self { telegram_id }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub pin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportWalletRequest {
    pub seed_phrase: String,
    pub pin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    pub supply: f64,
    pub image_url: Option<String>,
}

impl CreateTokenRequest {
    pub fn validate(&self) -> Result<(), WalletError> {
        if !self.supply.is_finite() || self.supply < MIN_TOKEN_SUPPLY {
            return Err(WalletError::InvalidRequest(format!(
                "supply must be at least {}, got {}",
                MIN_TOKEN_SUPPLY, self.supply
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTokensRequest {
    pub recipient: String,
    pub amount: f64,
    pub token_symbol: String,
}

impl SendTokensRequest {
    pub fn validate(&self) -> Result<(), WalletError> {
        if !self.amount.is_finite() || self.amount < MIN_SEND_AMOUNT {
            return Err(WalletError::InvalidRequest(format!(
                "amount must be at least {}, got {}",
                MIN_SEND_AMOUNT, self.amount
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct WalletExistsResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WalletAddressResponse {
    pub success: bool,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub success: bool,
    pub balance: WalletBalance,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub success: bool,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct BadgesResponse {
    pub success: bool,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: TokenBalance,
}

#[derive(Debug, Serialize)]
pub struct SendTokensResponse {
    pub success: bool,
    pub transaction: Transaction,
}
