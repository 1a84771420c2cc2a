//! Microphone presence report.

use super::RunSummary;
use crate::event::reader::EventReader;
use crate::event::token::TokenClassifier;
use log::{debug, info};
use std::io::{self, BufRead, Write};

pub const MIC_REPORT_BANNER: &str = "Ready to listen to stdin";
pub const MICROPHONE_ACTIVE: &str = "Microphone is active";

/// Reports unique token count and microphone presence for every input line.
///
/// # Errors
/// - Returns the first read or write failure.
pub fn run_mic_report<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<RunSummary> {
    let classifier = TokenClassifier::microphone();
    let mut reader = EventReader::new(input);
    let mut summary = RunSummary::default();

    writeln!(output, "{MIC_REPORT_BANNER}")?;
    output.flush()?;
    info!("event=session_start module=session status=ok session=mic_report");

    while let Some(line) = reader.next_line()? {
        let classification = classifier.classify(&line);
        summary.lines += 1;
        debug!(
            "event=line_classified module=session unique={} matched={}",
            classification.unique_services, classification.matched
        );

        writeln!(
            output,
            "{} unique services were received!",
            classification.unique_services
        )?;
        if classification.matched {
            summary.matched += 1;
            writeln!(output, "{MICROPHONE_ACTIVE}")?;
        }
        output.flush()?;
    }

    info!(
        "event=session_end module=session status=ok session=mic_report lines={} matched={}",
        summary.lines, summary.matched
    );
    Ok(summary)
}
