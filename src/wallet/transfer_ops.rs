/// Token transfer operations
use chrono::Utc;

use super::types::{Transaction, TransactionKind, TransactionStatus};
use super::wallet_ops::require_wallet;
use crate::error::WalletError;
use crate::storage::{random_base36, TelegramId, WalletStore};

const TX_ID_LEN: usize = 7;

/// Record a send from the user's wallet.
///
/// No balance is debited or credited and the amount is not checked against
/// holdings; the returned record is reported as confirmed immediately and is
/// not added to the history.
pub fn send_tokens(
    store: &dyn WalletStore,
    user: &TelegramId,
    recipient: String,
    amount: f64,
    token_symbol: String,
) -> Result<Transaction, WalletError> {
    let wallet = require_wallet(store, user)?;

    let transaction = Transaction {
        id: format!("tx_{}", random_base36(TX_ID_LEN)),
        kind: TransactionKind::Send,
        amount,
        token_symbol,
        counterparty: Some(recipient),
        timestamp: Utc::now(),
        status: TransactionStatus::Confirmed,
        description: None,
    };

    log::info!(
        "Sent {} {} from {} to {} ({})",
        transaction.amount,
        transaction.token_symbol,
        wallet.address,
        transaction.counterparty.as_deref().unwrap_or_default(),
        transaction.id
    );

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryWalletStore;
    use crate::wallet::wallet_ops::create_wallet;

    #[test]
    fn test_send_requires_wallet() {
        let store = InMemoryWalletStore::new();
        let result = send_tokens(
            &store,
            &TelegramId::new("9"),
            "@friend".to_string(),
            1.0,
            "HTR".to_string(),
        );
        assert!(matches!(result, Err(WalletError::WalletNotFound(_))));
    }

    #[test]
    fn test_send_builds_confirmed_record() {
        let store = InMemoryWalletStore::new();
        let user = TelegramId::new("9");
        create_wallet(&store, &user, None);

        let before = Utc::now();
        let tx = send_tokens(
            &store,
            &user,
            "@friend".to_string(),
            1_000_000_000.0,
            "BREW".to_string(),
        )
        .unwrap();

        assert!(tx.id.starts_with("tx_"));
        assert_eq!(tx.id.len(), 3 + 7);
        assert_eq!(tx.kind, TransactionKind::Send);
        assert_eq!(tx.status, TransactionStatus::Confirmed);
        assert_eq!(tx.counterparty.as_deref(), Some("@friend"));
        assert_eq!(tx.token_symbol, "BREW");
        assert!(tx.timestamp >= before);
    }
}
