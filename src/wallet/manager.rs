/// Wallet Manager - Orchestration Layer
///
/// Owns the wallet registry and the shared catalog, and delegates each
/// operation to its operation module.
use std::sync::Arc;

use super::catalog::Catalog;
use super::types::{Badge, TokenBalance, Transaction, WalletBalance};
use super::{balance_ops, history_ops, transfer_ops, wallet_ops};
use crate::config::{ExistsMode, ServerConfig};
use crate::error::WalletError;
use crate::storage::{InMemoryWalletStore, TelegramId, WalletRecord, WalletStore};

/// Answer to the wallet-existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPresence {
    pub exists: bool,
    pub address: Option<String>,
}

pub struct WalletManager {
    pub config: ServerConfig,
    store: Arc<dyn WalletStore>,
    catalog: Arc<Catalog>,
}

impl WalletManager {
    // ============================================================================
    // Constructor
    // ============================================================================

    pub fn new(config: ServerConfig) -> Self {
        Self::new_with_store(config, Arc::new(InMemoryWalletStore::new()))
    }

    /// Create WalletManager over a caller-provided store
    pub fn new_with_store(config: ServerConfig, store: Arc<dyn WalletStore>) -> Self {
        Self {
            config,
            store,
            catalog: Arc::new(Catalog::default()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Request user, falling back to the configured default
    pub fn resolve_user(&self, telegram_id: Option<String>) -> TelegramId {
        telegram_id
            .filter(|id| !id.trim().is_empty())
            .map(TelegramId::new)
            .unwrap_or_else(|| TelegramId::new(self.config.default_telegram_id.clone()))
    }

    // ============================================================================
    // Wallet Management (delegates to wallet_ops)
    // ============================================================================

    pub fn create_wallet(&self, user: &TelegramId, pin: Option<String>) -> WalletRecord {
        wallet_ops::create_wallet(self.store.as_ref(), user, pin)
    }

    pub fn import_wallet(
        &self,
        user: &TelegramId,
        seed_phrase: &str,
        pin: Option<String>,
    ) -> WalletRecord {
        wallet_ops::import_wallet(self.store.as_ref(), user, seed_phrase, pin)
    }

    pub fn get_or_provision(&self, user: &TelegramId) -> WalletRecord {
        wallet_ops::get_or_provision(self.store.as_ref(), user)
    }

    pub fn find_wallet(&self, user: &TelegramId) -> Option<WalletRecord> {
        wallet_ops::find_wallet(self.store.as_ref(), user)
    }

    pub fn wallet_presence(&self, user: &TelegramId) -> WalletPresence {
        match self.config.exists_mode {
            ExistsMode::Stub => WalletPresence {
                exists: false,
                address: Some(String::new()),
            },
            ExistsMode::Demo => WalletPresence {
                exists: true,
                address: Some(self.get_or_provision(user).address),
            },
            ExistsMode::Live => {
                let wallet = self.find_wallet(user);
                WalletPresence {
                    exists: wallet.is_some(),
                    address: wallet.map(|w| w.address),
                }
            }
        }
    }

    // ============================================================================
    // Balance & Tokens (delegates to balance_ops)
    // ============================================================================

    pub fn get_balance(&self, user: &TelegramId) -> Result<WalletBalance, WalletError> {
        balance_ops::get_balance(self.store.as_ref(), &self.catalog, user)
    }

    pub fn create_token(
        &self,
        user: &TelegramId,
        name: String,
        symbol: String,
        supply: f64,
        image_url: Option<String>,
    ) -> Result<TokenBalance, WalletError> {
        balance_ops::create_token(self.store.as_ref(), user, name, symbol, supply, image_url)
    }

    // ============================================================================
    // Transfers (delegates to transfer_ops)
    // ============================================================================

    pub fn send_tokens(
        &self,
        user: &TelegramId,
        recipient: String,
        amount: f64,
        token_symbol: String,
    ) -> Result<Transaction, WalletError> {
        transfer_ops::send_tokens(self.store.as_ref(), user, recipient, amount, token_symbol)
    }

    // ============================================================================
    // History (delegates to history_ops)
    // ============================================================================

    pub fn list_transactions(&self, user: &TelegramId) -> Result<Vec<Transaction>, WalletError> {
        history_ops::list_transactions(self.store.as_ref(), &self.catalog, user)
    }

    pub fn list_badges(&self, user: &TelegramId) -> Result<Vec<Badge>, WalletError> {
        history_ops::list_badges(self.store.as_ref(), &self.catalog, user)
    }
}

impl Default for WalletManager {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
