//! Device notification boundary.
//!
//! # Responsibility
//! - Define the `Notifier` seam used by the media toggle session.
//! - Map a media-active flag to a light service action.
//! - Surface delivery failures as typed errors instead of swallowing them.
//!
//! # Invariants
//! - One `set_media_active` call issues at most one outbound request.
//! - Notifiers never retry on their own.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod config;
mod home_assistant;

pub use config::{ConfigError, HomeAssistantConfig};
pub use home_assistant::{light_service_url, HomeAssistantNotifier, LightServiceBody};

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Light service selected from the media-active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightAction {
    TurnOn,
    TurnOff,
}

impl LightAction {
    pub fn from_media_active(active: bool) -> Self {
        if active {
            Self::TurnOn
        } else {
            Self::TurnOff
        }
    }

    /// Home Assistant service name under the `light` domain.
    pub fn service(self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
        }
    }
}

impl Display for LightAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.service())
    }
}

/// Delivery failure for one notification.
#[derive(Debug)]
pub enum NotifyError {
    /// Request body could not be serialized.
    Encoding(serde_json::Error),
    /// Transport failed before a response was received.
    Network(String),
    /// Server answered with an HTTP error status.
    Status(u16),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "failed to encode request body: {err}"),
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Status(code) => write!(f, "server responded with status {code}"),
        }
    }
}

impl Error for NotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            Self::Network(_) => None,
            Self::Status(_) => None,
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encoding(value)
    }
}

/// Receives the media-active state derived from each event line.
pub trait Notifier {
    fn set_media_active(&self, active: bool) -> NotifyResult<()>;
}
