/// Wallet Core Module
///
/// - `manager.rs` - Orchestrator for all wallet operations
/// - `wallet_ops.rs` - Wallet lifecycle operations
/// - `balance_ops.rs` - Balance queries and token issuance
/// - `transfer_ops.rs` - Token sends
/// - `history_ops.rs` - Transaction history and badges
/// - `catalog.rs` - Shared read-only fixture
/// - `types.rs` - Token, transaction and badge records

pub mod balance_ops;
pub mod catalog;
pub mod history_ops;
pub mod manager;
pub mod transfer_ops;
pub mod types;
pub mod wallet_ops;

pub use catalog::Catalog;
pub use manager::{WalletManager, WalletPresence};
