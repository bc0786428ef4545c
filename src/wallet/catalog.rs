/// Shared read-only wallet fixture
///
/// The balances, history and badges every wallet sees. Timestamps are fixed
/// relative to the instant the catalog is built, so repeated reads return
/// identical payloads.
use chrono::{DateTime, Duration, Utc};

use super::types::*;

const EARLY_SUPPORTER_IMAGE: &str = "https://images.unsplash.com/photo-1627163439134-7a8c47e08208?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200&q=80";
const TOP_TIPPER_IMAGE: &str = "https://pixabay.com/get/gbd5a6ce4c282aeabd242812b757af66bf31ecc9ae360c138d56b3507d69c2f4fd51c6b5d04c52c6906b3162295df7eb5eed4bd0252090fa0851824d38c80dca4_1280.jpg";
const COMMUNITY_LEADER_IMAGE: &str = "https://images.unsplash.com/photo-1618044733300-9472054094ee?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200&q=80";

#[derive(Debug, Clone)]
pub struct Catalog {
    tokens: Vec<TokenBalance>,
    transactions: Vec<Transaction>,
    badges: Vec<Badge>,
}

impl Catalog {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            tokens: fixture_tokens(),
            transactions: fixture_transactions(now),
            badges: fixture_badges(now),
        }
    }

    /// Native balance plus every community token
    pub fn balance(&self) -> WalletBalance {
        let htr = self
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::Native)
            .map(|t| t.balance)
            .unwrap_or_default();

        let tokens = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Community)
            .cloned()
            .collect();

        WalletBalance { htr, tokens }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

fn fixture_tokens() -> Vec<TokenBalance> {
    vec![
        TokenBalance {
            id: "htr".to_string(),
            name: "Hathor".to_string(),
            symbol: NATIVE_SYMBOL.to_string(),
            balance: 1254.75,
            kind: TokenKind::Native,
            logo_url: None,
            usd_value: Some(125.47),
            change: None,
        },
        TokenBalance {
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
        },
        TokenBalance {
            id: "vibe".to_string(),
            name: "VibeToken".to_string(),
            symbol: "VIBE".to_string(),
            balance: 75.0,
            kind: TokenKind::Community,
            logo_url: None,
            usd_value: None,
            change: Some(PriceChange {
                value: 3.0,
                direction: ChangeDirection::Down,
            }),
        },
    ]
}

fn fixture_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx1".to_string(),
            kind: TransactionKind::Receive,
            amount: 5.0,
            token_symbol: "VIBE".to_string(),
            counterparty: Some("@alexcoder".to_string()),
            timestamp: now - Duration::hours(2),
            status: TransactionStatus::Confirmed,
            description: None,
        },
        Transaction {
            id: "tx2".to_string(),
            kind: TransactionKind::Nft,
            amount: 1.0,
            token_symbol: "NFT".to_string(),
            counterparty: None,
            timestamp: now - Duration::hours(24),
            status: TransactionStatus::Confirmed,
            description: Some("Top Tipper Badge".to_string()),
        },
        Transaction {
            id: "tx3".to_string(),
            kind: TransactionKind::Send,
            amount: 2.5,
            token_symbol: "BREW".to_string(),
            counterparty: Some("@coffeelover".to_string()),
            timestamp: now - Duration::days(2),
            status: TransactionStatus::Confirmed,
            description: None,
        },
    ]
}

fn fixture_badges(now: DateTime<Utc>) -> Vec<Badge> {
    vec![
        Badge {
            id: "badge1".to_string(),
            name: "Early Supporter".to_string(),
            image_url: EARLY_SUPPORTER_IMAGE.to_string(),
            is_locked: false,
            description: None,
            earned_at: Some(now - Duration::days(7)),
            conditions: None,
        },
        Badge {
            id: "badge2".to_string(),
            name: "Top Tipper".to_string(),
            image_url: TOP_TIPPER_IMAGE.to_string(),
            is_locked: false,
            description: None,
            earned_at: Some(now - Duration::days(3)),
            conditions: None,
        },
        Badge {
            id: "badge3".to_string(),
            name: "Community Leader".to_string(),
            image_url: COMMUNITY_LEADER_IMAGE.to_string(),
            is_locked: true,
            description: Some("Earn this badge by being active for 30 days".to_string()),
            earned_at: None,
            conditions: Some(BadgeCondition {
                kind: BadgeConditionKind::ActivityDays,
                threshold: 30,
                token_id: None,
            }),
        },
    ]
}
