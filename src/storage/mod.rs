//! Wallet registry
//!
//! - Store trait and in-memory implementation
//! - Stored wallet records
//! - Placeholder key material

mod keys;
mod models;
mod registry;

pub use keys::{random_base36, PlaceholderKeys, DEMO_ADDRESS};
pub use models::{TelegramId, WalletRecord};
pub use registry::{InMemoryWalletStore, WalletStore};
