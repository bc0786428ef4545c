/// Transaction history and badge listing
use super::catalog::Catalog;
use super::types::{Badge, Transaction};
use super::wallet_ops::require_wallet;
use crate::error::WalletError;
use crate::storage::{TelegramId, WalletStore};

pub fn list_transactions(
    store: &dyn WalletStore,
    catalog: &Catalog,
    user: &TelegramId,
) -> Result<Vec<Transaction>, WalletError> {
    require_wallet(store, user)?;
    Ok(catalog.transactions().to_vec())
}

pub fn list_badges(
    store: &dyn WalletStore,
    catalog: &Catalog,
    user: &TelegramId,
) -> Result<Vec<Badge>, WalletError> {
    require_wallet(store, user)?;
    Ok(catalog.badges().to_vec())
}
