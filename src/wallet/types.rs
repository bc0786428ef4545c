//! Wallet-facing records as the Mini App consumes them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NATIVE_SYMBOL: &str = "HTR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Native,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub value: f64,
    pub direction: ChangeDirection,
}

/// A token as held by a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub balance: f64,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<PriceChange>,
}

/// Balance summary: native amount plus community token holdings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub htr: f64,
    pub tokens: Vec<TokenBalance>,
}

/// A user-created community token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub supply: f64,
    pub image_url: Option<String>,
    /// Address of the creating wallet
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

impl From<Token> for TokenBalance {
    /// The creator holds the whole supply
    fn from(token: Token) -> Self {
        Self {
            id: token.id,
            name: token.name,
            symbol: token.symbol,
            balance: token.supply,
            kind: TokenKind::Community,
            logo_url: token.image_url.filter(|url| !url.is_empty()),
            usd_value: None,
            change: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Send,
    Receive,
    Mint,
    Nft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub token_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeConditionKind {
    MessageCount,
    TipAmount,
    ActivityDays,
}

/// What unlocks a badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCondition {
    #[serde(rename = "type")]
    pub kind: BadgeConditionKind,
    pub threshold: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// NFT badge, locked until its condition is met
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<BadgeCondition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_balance_wire_shape() {
        let token = TokenBalance {
            id: "brew".to_string(),
            name: "CoffeeCoin".to_string(),
            symbol: "BREW".to_string(),
            balance: 25.5,
            kind: TokenKind::Community,
            logo_url: None,
            usd_value: None,
            change: Some(PriceChange {
                value: 12.0,
                direction: ChangeDirection::Up,
            }),
        };

        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "brew",
                "name": "CoffeeCoin",
                "symbol": "BREW",
                "balance": 25.5,
                "type": "community",
                "change": { "value": 12.0, "direction": "up" }
            })
        );
    }

    #[test]
    fn test_token_into_balance() {
        let token = Token {
            id: "token_abc1234".to_string(),
            name: "Tip".to_string(),
            symbol: "TIP".to_string(),
            supply: 500.0,
            image_url: Some("https://img.example/tip.png".to_string()),
            creator: "HTRcreator".to_string(),
            created_at: Utc::now(),
        };

        let balance = TokenBalance::from(token);
        assert_eq!(balance.balance, 500.0);
        assert_eq!(balance.kind, TokenKind::Community);
        assert_eq!(balance.logo_url.as_deref(), Some("https://img.example/tip.png"));
    }

    #[test]
    fn test_empty_image_url_omits_logo() {
        let token = Token {
            id: "token_abc1234".to_string(),
            name: "Tip".to_string(),
            symbol: "TIP".to_string(),
            supply: 5.0,
            image_url: Some(String::new()),
            creator: "HTRcreator".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(TokenBalance::from(token)).unwrap();
        assert!(value.get("logoUrl").is_none());
    }

    #[test]
    fn test_badge_condition_wire_shape() {
        let condition = BadgeCondition {
            kind: BadgeConditionKind::ActivityDays,
            threshold: 30,
            token_id: None,
        };
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value, json!({ "type": "activity_days", "threshold": 30 }));
    }
}
