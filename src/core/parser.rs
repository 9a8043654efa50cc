// logdiff - core/parser.rs
//
// Record extraction from the flat `Key = Value` block format.
// Core layer: accepts file content as a string, never touches the filesystem
// directly (platform::fs owns reading).
//
// A record is closed by its `Message` line. Severity and timestamp lines are
// held in a pending accumulator until the next message consumes them, after
// which the accumulator is reset. A message therefore picks up whatever
// severity/timestamp were seen since the previous message, even when those
// belong to an earlier block in the file.

use crate::core::model::{ExtractedLog, LogRecord};
use crate::util::constants;
use crate::util::error::ParseError;
use std::path::Path;

/// Which marker a line starts with, after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Message,
    Severity,
    Timestamp,
}

impl Marker {
    /// Classify a line. `Message` is checked first, then `Severity`, then
    /// `Timestamp`; any other line is ignored.
    fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.starts_with(constants::MESSAGE_MARKER) {
            Some(Marker::Message)
        } else if trimmed.starts_with(constants::SEVERITY_MARKER) {
            Some(Marker::Severity)
        } else if trimmed.starts_with(constants::TIMESTAMP_MARKER) {
            Some(Marker::Timestamp)
        } else {
            None
        }
    }
}

/// Fields seen since the last emitted record.
#[derive(Debug, Default)]
struct PendingRecord {
    message: Option<String>,
    severity: Option<String>,
    timestamp: Option<String>,
}

impl PendingRecord {
    fn set(&mut self, marker: Marker, value: String) {
        match marker {
            // An empty message value never closes a record.
            Marker::Message => self.message = Some(value).filter(|v| !v.is_empty()),
            Marker::Severity => self.severity = Some(value),
            Marker::Timestamp => self.timestamp = Some(value),
        }
    }

    /// Emit a record if a message is pending, resetting all fields.
    fn take_record(&mut self) -> Option<LogRecord> {
        let message = self.message.take()?;
        let pending = std::mem::take(self);
        Some(LogRecord {
            message,
            severity: pending.severity,
            timestamp: pending.timestamp,
        })
    }
}

/// Split a marker line on its first `=` and return the trimmed value.
fn marker_value(line: &str) -> Option<String> {
    line.split_once(constants::KEY_VALUE_SEPARATOR)
        .map(|(_, value)| value.trim().to_string())
}

/// Parse `content` line by line into individual records, in file order.
///
/// Returns `MalformedLogLine` for the first marker line without `=`.
pub fn parse_records(content: &str, file_path: &Path) -> Result<Vec<LogRecord>, ParseError> {
    let mut records = Vec::new();
    let mut pending = PendingRecord::default();

    for (line_idx, line) in content.lines().enumerate() {
        if let Some(marker) = Marker::classify(line) {
            let value = marker_value(line).ok_or_else(|| ParseError::MalformedLogLine {
                file: file_path.to_path_buf(),
                line_number: (line_idx as u64) + 1,
                line: line.to_string(),
            })?;
            pending.set(marker, value);
        }

        if let Some(record) = pending.take_record() {
            records.push(record);
        }
    }

    Ok(records)
}

/// Extract the distinct message set and last-seen metadata from `content`.
pub fn extract_messages(content: &str, file_path: &Path) -> Result<ExtractedLog, ParseError> {
    let records = parse_records(content, file_path)?;

    let mut extracted = ExtractedLog::default();
    for record in &records {
        extracted.insert(record);
    }

    tracing::debug!(
        file = %file_path.display(),
        records = records.len(),
        distinct = extracted.messages.len(),
        "Messages extracted"
    );

    Ok(extracted)
}
