//! Runtime Configuration
//!
//! Settings are read once at startup from environment variables. Every value
//! except the provider key has a default so a local run only needs
//! `PIXABAY_API_KEY`.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_PER_PAGE: u32 = 40;
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

/// Page sizes the provider accepts.
const PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 3..=200;

/// Settings for the image provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub per_page: u32,
    pub image_type: String,
    pub orientation: String,
    pub safe_search: bool,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Builds a config with provider defaults for the given key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            per_page: DEFAULT_PER_PAGE,
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safe_search: true,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Top-level configuration of the widget server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub provider: ProviderConfig,
    /// Sessions untouched for this long are evicted.
    pub session_idle: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get("PIXABAY_API_KEY").context("PIXABAY_API_KEY must be set")?;
        let mut provider = ProviderConfig::with_key(api_key);

        if let Some(base_url) = get("PIXABAY_BASE_URL") {
            provider.base_url = base_url;
        }

        if let Some(raw) = get("PIXABAY_PER_PAGE") {
            let per_page: u32 = raw
                .parse()
                .with_context(|| format!("PIXABAY_PER_PAGE is not a number: {}", raw))?;
            anyhow::ensure!(
                PER_PAGE_RANGE.contains(&per_page),
                "PIXABAY_PER_PAGE must be between {} and {}, got {}",
                PER_PAGE_RANGE.start(),
                PER_PAGE_RANGE.end(),
                per_page
            );
            provider.per_page = per_page;
        }

        if let Some(image_type) = get("PIXABAY_IMAGE_TYPE") {
            provider.image_type = image_type;
        }
        if let Some(orientation) = get("PIXABAY_ORIENTATION") {
            provider.orientation = orientation;
        }

        if let Some(raw) = get("PIXABAY_SAFESEARCH") {
            provider.safe_search = raw
                .parse()
                .with_context(|| format!("PIXABAY_SAFESEARCH must be true or false: {}", raw))?;
        }

        if let Some(raw) = get("PIXABAY_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("PIXABAY_TIMEOUT_SECS is not a number: {}", raw))?;
            provider.timeout = Duration::from_secs(secs);
        }

        let bind_addr = get("UI_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .context("UI_BIND is not a valid socket address")?;

        let session_idle = match get("SESSION_IDLE_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("SESSION_IDLE_SECS is not a number: {}", raw))?;
                anyhow::ensure!(secs > 0, "SESSION_IDLE_SECS must be positive");
                Duration::from_secs(secs)
            }
            None => DEFAULT_SESSION_IDLE,
        };

        Ok(Self {
            bind_addr,
            provider,
            session_idle,
        })
    }
}
