/// Balance and token issuance operations
use chrono::Utc;

use super::catalog::Catalog;
use super::types::{Token, TokenBalance, WalletBalance};
use super::wallet_ops::require_wallet;
use crate::error::WalletError;
use crate::storage::{random_base36, TelegramId, WalletStore};

const TOKEN_ID_LEN: usize = 7;

/// Balance of the user's wallet.
///
/// Every registered wallet sees the same catalog balance.
pub fn get_balance(
    store: &dyn WalletStore,
    catalog: &Catalog,
    user: &TelegramId,
) -> Result<WalletBalance, WalletError> {
    require_wallet(store, user)?;
    Ok(catalog.balance())
}

/// Issue a community token held entirely by the creator.
///
/// The token is returned to the caller only; later balance reads do not
/// include it.
pub fn create_token(
    store: &dyn WalletStore,
    user: &TelegramId,
    name: String,
    symbol: String,
    supply: f64,
    image_url: Option<String>,
) -> Result<TokenBalance, WalletError> {
    let wallet = require_wallet(store, user)?;

    let token = Token {
        id: format!("token_{}", random_base36(TOKEN_ID_LEN)),
        name,
        symbol,
        supply,
        image_url,
        creator: wallet.address,
        created_at: Utc::now(),
    };

    log::info!(
        "Created token {} ({}) with supply {} for wallet {}",
        token.name,
        token.symbol,
        token.supply,
        token.creator
    );

    Ok(token.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryWalletStore;
    use crate::wallet::types::TokenKind;
    use crate::wallet::wallet_ops::create_wallet;

    #[test]
    fn test_balance_requires_wallet() {
        let store = InMemoryWalletStore::new();
        let catalog = Catalog::default();

        let result = get_balance(&store, &catalog, &TelegramId::new("1"));
        assert!(matches!(result, Err(WalletError::WalletNotFound(_))));
    }

    #[test]
    fn test_created_token_not_in_balance() {
        let store = InMemoryWalletStore::new();
        let catalog = Catalog::default();
        let user = TelegramId::new("1");
        create_wallet(&store, &user, None);

        let token = create_token(
            &store,
            &user,
            "Tip".to_string(),
            "TIP".to_string(),
            1_000_000.0,
            None,
        )
        .unwrap();

        assert_eq!(token.balance, 1_000_000.0);
        assert_eq!(token.kind, TokenKind::Community);
        assert!(token.logo_url.is_none());

        let balance = get_balance(&store, &catalog, &user).unwrap();
        assert!(balance.tokens.iter().all(|t| t.symbol != "TIP"));
    }

    #[test]
    fn test_token_id_shape() {
        let store = InMemoryWalletStore::new();
        let user = TelegramId::new("1");
        create_wallet(&store, &user, None);

        let token = create_token(
            &store,
            &user,
            "Tip".to_string(),
            "TIP".to_string(),
            1.0,
            Some("https://img.example/tip.png".to_string()),
        )
        .unwrap();

        let suffix = token.id.strip_prefix("token_").unwrap();
        assert_eq!(suffix.len(), 7);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(token.logo_url.as_deref(), Some("https://img.example/tip.png"));
    }
}
