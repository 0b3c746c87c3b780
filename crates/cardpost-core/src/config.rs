use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::auth::DEFAULT_AUTHORITY_BASE;
use crate::retry::{ErrorKind, RetryOn, RetryPolicy};

/// Retry parameters for webhook delivery (optional `[retry]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first). 0 = unlimited.
    pub max_attempts: u32,
    /// Fixed pause between attempts in milliseconds.
    pub delay_ms: u64,
    /// Error kinds to retry; if missing, transport failures and any non-2xx status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_on: Option<Vec<ErrorKind>>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 5000,
            retry_on: None,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::from(self)
    }

    pub fn retry_on(&self) -> RetryOn {
        match &self.retry_on {
            Some(kinds) => RetryOn::new(kinds.iter().copied()),
            None => RetryOn::transient(),
        }
    }
}

/// HTTP client timeouts (optional `[http]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Identity provider settings (optional `[auth]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Issuer base; the tenant id is appended to form the authority.
    pub authority_base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authority_base: DEFAULT_AUTHORITY_BASE.to_string(),
            client_id: None,
            tenant_id: None,
        }
    }
}

/// Global configuration loaded from `~/.config/cardpost/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardpostConfig {
    /// Default webhook endpoint for `send` when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    #[serde(default)]
    pub http: Option<HttpConfig>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

impl CardpostConfig {
    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }

    pub fn http_or_default(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }

    pub fn auth_or_default(&self) -> AuthConfig {
        self.auth.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cardpost")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CardpostConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CardpostConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CardpostConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CardpostConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
