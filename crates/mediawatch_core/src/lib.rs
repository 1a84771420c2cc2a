//! Core logic for mediawatch.
//! Reads media-device event lines and reacts to microphone/camera tokens.

pub mod event;
pub mod logging;
pub mod notify;
pub mod session;

pub use event::reader::EventReader;
pub use event::token::{
    Classification, TokenClassifier, TokenSet, CAM_PREFIX, MEDIA_PREFIXES, MIC_PREFIX,
    MIC_PREFIXES,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use notify::{
    ConfigError, HomeAssistantConfig, HomeAssistantNotifier, LightAction, Notifier, NotifyError,
    NotifyResult,
};
pub use session::{run_media_toggle, run_mic_report, RunSummary, ToggleMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
