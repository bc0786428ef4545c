use dashmap::DashMap;

use super::models::{TelegramId, WalletRecord};

/// Keyed wallet storage.
///
/// Writes are last-write-wins: `put` replaces whatever was stored for the
/// user and hands back the previous record.
pub trait WalletStore: Send + Sync {
    fn get(&self, user: &TelegramId) -> Option<WalletRecord>;

    fn put(&self, user: &TelegramId, record: WalletRecord) -> Option<WalletRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryWalletStore {
    wallets: DashMap<TelegramId, WalletRecord>,
}

impl InMemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalletStore for InMemoryWalletStore {
    fn get(&self, user: &TelegramId) -> Option<WalletRecord> {
        self.wallets.get(user).map(|entry| entry.value().clone())
    }

    fn put(&self, user: &TelegramId, record: WalletRecord) -> Option<WalletRecord> {
        self.wallets.insert(user.clone(), record)
    }

    fn len(&self) -> usize {
        self.wallets.len()
    }
}
