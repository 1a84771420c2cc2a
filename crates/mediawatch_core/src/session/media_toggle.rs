//! Media activity toggle.
//!
//! # Invariants
//! - `EveryLine` issues exactly one notifier call per input line.
//! - `OnChange` skips the call only when the same state was already delivered
//!   successfully; a failed delivery is attempted again on the next line.

use super::RunSummary;
use crate::event::reader::EventReader;
use crate::event::token::TokenClassifier;
use crate::notify::Notifier;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

pub const MEDIA_TOGGLE_BANNER: &str = "Reading stdin for events";
pub const MEDIA_ACTIVE: &str = "Media is active";
pub const MEDIA_INACTIVE: &str = "Media is not active";
pub const NOTIFY_FAILED: &str = "Failed to send event to Home Assistant";

/// When the notifier is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleMode {
    /// Call on every line regardless of the previous state.
    #[default]
    EveryLine,
    /// Call only when the state differs from the last delivered one.
    OnChange,
}

/// Prints media activity for every line and forwards it to `notifier`.
///
/// # Errors
/// - Returns the first read or write failure. Notifier failures are reported
///   on `output` and counted, never returned.
pub fn run_media_toggle<R, W, N>(
    input: R,
    mut output: W,
    notifier: &N,
    mode: ToggleMode,
) -> io::Result<RunSummary>
where
    R: BufRead,
    W: Write,
    N: Notifier + ?Sized,
{
    let classifier = TokenClassifier::media();
    let mut reader = EventReader::new(input);
    let mut summary = RunSummary::default();
    let mut last_delivered: Option<bool> = None;

    writeln!(output, "{MEDIA_TOGGLE_BANNER}")?;
    output.flush()?;
    info!(
        "event=session_start module=session status=ok session=media_toggle mode={:?}",
        mode
    );

    while let Some(line) = reader.next_line()? {
        let classification = classifier.classify(&line);
        let active = classification.matched;
        summary.lines += 1;
        debug!(
            "event=line_classified module=session unique={} matched={}",
            classification.unique_services, classification.matched
        );
        if active {
            summary.matched += 1;
        }

        writeln!(output, "{}", if active { MEDIA_ACTIVE } else { MEDIA_INACTIVE })?;

        let should_notify = match mode {
            ToggleMode::EveryLine => true,
            ToggleMode::OnChange => last_delivered != Some(active),
        };
        if should_notify {
            summary.notifications += 1;
            match notifier.set_media_active(active) {
                Ok(()) => last_delivered = Some(active),
                Err(err) => {
                    last_delivered = None;
                    summary.notify_failures += 1;
                    warn!(
                        "event=notify_failed module=session status=error active={} error={}",
                        active, err
                    );
                    writeln!(output, "{NOTIFY_FAILED}")?;
                }
            }
        } else {
            debug!(
                "event=notify_skipped module=session status=ok active={} reason=unchanged",
                active
            );
        }
        output.flush()?;
    }

    info!(
        "event=session_end module=session status=ok session=media_toggle lines={} notifications={} failures={}",
        summary.lines, summary.notifications, summary.notify_failures
    );
    Ok(summary)
}
