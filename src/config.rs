//! Configuration, read once from environment variables at startup.

use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PLACEHOLDER_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the text-generation API; `/v1/messages` is appended.
    pub api_url: String,
    /// Held server-side only; never rendered into a page.
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub placeholder_secs: u64,
}

impl Config {
    /// A configuration with defaults for everything but the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            placeholder_secs: DEFAULT_PLACEHOLDER_SECS,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("ANTHROPIC_API_KEY").ok_or(ConfigError::Missing("ANTHROPIC_API_KEY"))?;
        let mut config = Self::new(api_key);

        if let Some(host) = get("MIND_DUMP_HOST") {
            config.host = host;
        }
        if let Some(port) = get("MIND_DUMP_PORT") {
            config.port = parse_number("MIND_DUMP_PORT", &port)?;
        }
        if let Some(api_url) = get("ANTHROPIC_API_URL") {
            let parsed = Url::parse(&api_url).map_err(|e| ConfigError::Invalid {
                name: "ANTHROPIC_API_URL",
                reason: e.to_string(),
            })?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                return Err(ConfigError::Invalid {
                    name: "ANTHROPIC_API_URL",
                    reason: format!("unsupported scheme {}", parsed.scheme()),
                });
            }
            config.api_url = api_url;
        }
        if let Some(model) = get("MIND_DUMP_MODEL") {
            config.model = model;
        }
        if let Some(max_tokens) = get("MIND_DUMP_MAX_TOKENS") {
            config.max_tokens = parse_number("MIND_DUMP_MAX_TOKENS", &max_tokens)?;
        }
        if let Some(timeout) = get("MIND_DUMP_TIMEOUT_SECS") {
            config.timeout_secs = parse_number("MIND_DUMP_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(secs) = get("MIND_DUMP_PLACEHOLDER_SECS") {
            config.placeholder_secs = parse_number("MIND_DUMP_PLACEHOLDER_SECS", &secs)?;
        }

        if config.placeholder_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "MIND_DUMP_PLACEHOLDER_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
