/// Server configuration from environment variables
///
/// Controls the listen address, CORS origins, the fallback Telegram user
/// and how the wallet-existence check answers.
use std::env;

use axum::http::HeaderValue;

use crate::error::WalletError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_TELEGRAM_ID: &str = "123456789";

/// How `GET /api/wallet/exists` answers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExistsMode {
    /// Always reports no wallet, forcing the create/import flow in the Mini App
    #[default]
    Stub,
    /// Reports a wallet, provisioning the demo wallet on first read
    Demo,
    /// Looks the user up in the registry without side effects
    Live,
}

impl ExistsMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stub" => Some(Self::Stub),
            "demo" => Some(Self::Demo),
            "live" => Some(Self::Live),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    /// `None` allows any origin
    pub allowed_origins: Option<Vec<HeaderValue>>,
    pub default_telegram_id: String,
    pub exists_mode: ExistsMode,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `BIND_ADDRESS`: listen address (default `0.0.0.0:5000`)
    /// - `ALLOWED_ORIGINS`: comma separated CORS origins (default: any)
    /// - `DEFAULT_TELEGRAM_ID`: user id when a request carries none
    /// - `WALLET_EXISTS_MODE`: `stub` (default), `demo` or `live`
    /// - `DEMO_MODE`: `true` selects `demo` when `WALLET_EXISTS_MODE` is unset
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv::dotenv().ok();

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(origins) if !origins.trim().is_empty() => Some(parse_origins(&origins)?),
            _ => None,
        };

        let default_telegram_id = env::var("DEFAULT_TELEGRAM_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TELEGRAM_ID.to_string());

        let demo_mode = env::var("DEMO_MODE")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let exists_mode = match env::var("WALLET_EXISTS_MODE") {
            Ok(value) => ExistsMode::parse(&value).unwrap_or_else(|| {
                log::warn!("Unknown WALLET_EXISTS_MODE '{}', defaulting to stub", value);
                ExistsMode::Stub
            }),
            Err(_) if demo_mode => ExistsMode::Demo,
            Err(_) => ExistsMode::Stub,
        };

        log::info!("Wallet exists check mode: {:?}", exists_mode);

        Ok(Self {
            bind_address,
            allowed_origins,
            default_telegram_id,
            exists_mode,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origins: None,
            default_telegram_id: DEFAULT_TELEGRAM_ID.to_string(),
            exists_mode: ExistsMode::Stub,
        }
    }
}

fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, WalletError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| WalletError::Config(format!("Invalid CORS origin '{}': {}", s, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.default_telegram_id, "123456789");
        assert_eq!(config.exists_mode, ExistsMode::Stub);
        assert!(config.allowed_origins.is_none());
    }

    #[test]
    fn test_exists_mode_parse() {
        assert_eq!(ExistsMode::parse("LIVE"), Some(ExistsMode::Live));
        assert_eq!(ExistsMode::parse(" demo "), Some(ExistsMode::Demo));
        assert_eq!(ExistsMode::parse("stub"), Some(ExistsMode::Stub));
        assert_eq!(ExistsMode::parse("sometimes"), None);
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("https://a.example, https://b.example,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://b.example");

        assert!(parse_origins("https://ok.example,bad\norigin").is_err());
    }
}
