//! Home Assistant connection settings.
//!
//! # Invariants
//! - `base_url` is an `http://` or `https://` URL without a trailing `/`.
//! - `entity_id` is non-empty.
//! - `timeout` is strictly positive.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://homeassistant.local:8123";
pub const DEFAULT_ENTITY_ID: &str = "light.on_air_light";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection and target settings for [`super::HomeAssistantNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeAssistantConfig {
    pub base_url: String,
    /// Long-lived access token sent as a bearer credential. May be empty.
    pub token: String,
    pub entity_id: String,
    /// Overall deadline for one request, connect included.
    pub timeout: Duration,
}

impl Default for HomeAssistantConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            entity_id: DEFAULT_ENTITY_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HomeAssistantConfig {
    /// Validates and normalizes settings in place of raw user input.
    ///
    /// # Errors
    /// - Returns an error when the base URL is empty or not http(s).
    /// - Returns an error when the entity id is empty.
    /// - Returns an error when the timeout is zero.
    pub fn normalized(self) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let entity_id = self.entity_id.trim();
        if entity_id.is_empty() {
            return Err(ConfigError::EmptyEntityId);
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            base_url,
            token: self.token.trim().to_string(),
            entity_id: entity_id.to_string(),
            timeout: self.timeout,
        })
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.trim().to_string())),
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBaseUrl,
    InvalidBaseUrl(String),
    EmptyEntityId,
    ZeroTimeout,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBaseUrl => write!(f, "base url cannot be empty"),
            Self::InvalidBaseUrl(value) => {
                write!(f, "base url must start with http:// or https://, got `{value}`")
            }
            Self::EmptyEntityId => write!(f, "entity id cannot be empty"),
            Self::ZeroTimeout => write!(f, "request timeout must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}
