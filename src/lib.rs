//! Hathor TG Wallet: mock wallet backend for a Telegram Mini App
//!
//! Serves wallet creation/import, balances, token issuance, sends,
//! transaction history and NFT badges as JSON over HTTP.
//!
//! # Architecture
//!
//! - **Storage**: wallet registry keyed by Telegram user id
//! - **Wallet**: shared catalog fixture and wallet operations
//! - **API**: axum router and handlers
//!
//! Nothing here is cryptographic or persistent. Addresses and keys are
//! random placeholder strings, balances and history come from a fixed
//! catalog, and sends do not move funds.
//!
//! # Example
//!
//! ```ignore
//! use hathor_tg_wallet::{api::server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! server::start_server(config).await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod wallet;

pub use config::{ExistsMode, ServerConfig};
pub use error::{ApiError, WalletError};
pub use storage::{InMemoryWalletStore, TelegramId, WalletRecord, WalletStore};
pub use wallet::WalletManager;
