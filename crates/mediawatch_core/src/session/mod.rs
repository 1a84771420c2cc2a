//! Line-processing sessions behind the CLI subcommands.
//!
//! # Responsibility
//! - Drive reader, classifier and notifier until input ends.
//! - Own every stdout status line so callers stay output-agnostic.
//!
//! # Invariants
//! - Output is flushed after every processed line.
//! - End of input returns `Ok(RunSummary)`; only I/O failures are errors.
//! - Notifier failures print one diagnostic and never stop the loop.

mod media_toggle;
mod mic_report;

pub use media_toggle::{
    run_media_toggle, ToggleMode, MEDIA_ACTIVE, MEDIA_INACTIVE, MEDIA_TOGGLE_BANNER,
    NOTIFY_FAILED,
};
pub use mic_report::{run_mic_report, MICROPHONE_ACTIVE, MIC_REPORT_BANNER};

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from input.
    pub lines: u64,
    /// Lines with at least one recognized token.
    pub matched: u64,
    /// Notifier calls attempted.
    pub notifications: u64,
    /// Notifier calls that failed.
    pub notify_failures: u64,
}
