//! Relay configuration loaded from TOML.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use fprovider::FallbackText;
use fprovider::adapters::turing::{DEFAULT_TIMEOUT, DEFAULT_USER_ID, TURING_API_URL, TuringConfig};
use serde::{Deserialize, Serialize};

/// Default configuration file name, used when no path is given.
pub const CONFIG_FILE: &str = "frelay.toml";
/// Provider the `/api/say` route asks unless configured otherwise.
pub const DEFAULT_PROVIDER: &str = "turing";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Top-level relay configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Apology texts for the two fallback paths.
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// Provider entries keyed by the name the repertory registers them under.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

/// Server configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Provider name used for every `/api/say` request.
    pub provider: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Returned when the requested provider is not registered.
    pub unknown_provider: String,
    /// Returned by a provider whose outbound call failed.
    pub provider_failure: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        let text = FallbackText::default();
        Self {
            unknown_provider: text.unknown_provider,
            provider_failure: text.provider_failure,
        }
    }
}

impl From<&FallbackConfig> for FallbackText {
    fn from(value: &FallbackConfig) -> Self {
        FallbackText::default()
            .with_unknown_provider(value.unknown_provider.clone())
            .with_provider_failure(value.provider_failure.clone())
    }
}

/// One provider entry, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Turing robot question-answering API.
    Turing(TuringProviderConfig),
    /// Fixed reply for every question.
    Canned(CannedProviderConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuringProviderConfig {
    #[serde(default = "default_turing_api_url")]
    pub api_url: String,
    /// API key (supports `${ENV_VAR}` expansion).
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_turing_user_id")]
    pub user_id: String,
    #[serde(default = "default_turing_timeout_secs")]
    pub timeout_secs: u64,
}

impl TuringProviderConfig {
    pub fn to_turing_config(&self) -> TuringConfig {
        TuringConfig::new(self.api_url.clone(), self.api_key.clone())
            .with_user_id(self.user_id.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedProviderConfig {
    pub reply: String,
}

fn default_turing_api_url() -> String {
    TURING_API_URL.to_string()
}

fn default_turing_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_turing_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl RelayConfig {
    /// Parse a TOML string into a `RelayConfig`, expanding environment
    /// variables first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = crate::utils::expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded).context("failed to parse relay config")?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }
}
