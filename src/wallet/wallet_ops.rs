/// Wallet lifecycle operations
///
/// Handles wallet creation, import and lookup. Create and import never
/// check for an existing wallet; the newest call wins.
use chrono::Utc;

use crate::error::WalletError;
use crate::storage::{PlaceholderKeys, TelegramId, WalletRecord, WalletStore, DEMO_ADDRESS};

/// Create a new wallet with random placeholder keys
pub fn create_wallet(
    store: &dyn WalletStore,
    user: &TelegramId,
    pin: Option<String>,
) -> WalletRecord {
    let keys = PlaceholderKeys::generate();
    let record = store_wallet(store, user, keys, pin);
    log::info!("Created wallet {} for telegram user {}", record.address, user);
    record
}

/// Import a wallet; the address is taken from the seed phrase text
pub fn import_wallet(
    store: &dyn WalletStore,
    user: &TelegramId,
    seed_phrase: &str,
    pin: Option<String>,
) -> WalletRecord {
    let keys = PlaceholderKeys::from_seed_phrase(seed_phrase);
    let record = store_wallet(store, user, keys, pin);
    log::info!("Imported wallet {} for telegram user {}", record.address, user);
    record
}

/// Stored wallet for the user, provisioning the demo wallet on first read
pub fn get_or_provision(store: &dyn WalletStore, user: &TelegramId) -> WalletRecord {
    if let Some(record) = store.get(user) {
        return record;
    }

    log::info!("Provisioning demo wallet for telegram user {}", user);
    store_wallet(store, user, PlaceholderKeys::with_address(DEMO_ADDRESS), None)
}

/// Stored wallet for the user, without side effects
pub fn find_wallet(store: &dyn WalletStore, user: &TelegramId) -> Option<WalletRecord> {
    store.get(user)
}

/// Stored wallet for the user, or `WalletNotFound`
pub fn require_wallet(
    store: &dyn WalletStore,
    user: &TelegramId,
) -> Result<WalletRecord, WalletError> {
    store
        .get(user)
        .ok_or_else(|| WalletError::WalletNotFound(user.to_string()))
}

fn store_wallet(
    store: &dyn WalletStore,
    user: &TelegramId,
    keys: PlaceholderKeys,
    pin: Option<String>,
) -> WalletRecord {
    let record = WalletRecord {
        address: keys.address,
        public_key: keys.public_key,
        encrypted_private_key: keys.encrypted_private_key,
        pin,
        created_at: Utc::now(),
    };

    if let Some(previous) = store.put(user, record.clone()) {
        log::warn!(
            "Replaced wallet {} for telegram user {}",
            previous.address,
            user
        );
    }

    record
}
