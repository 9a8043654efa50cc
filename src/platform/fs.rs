// logdiff - platform/fs.rs
//
// Filesystem helpers: strict log file reading and report persistence.

use crate::util::error::{ExportError, ParseError};
use std::path::Path;

/// Read the full content of a log file as UTF-8.
///
/// Invalid UTF-8 is an error rather than being replaced, so a mis-encoded
/// snapshot aborts the run instead of producing a silently mangled diff.
pub fn read_log_file(path: &Path) -> Result<String, ParseError> {
    let bytes = std::fs::read(path).map_err(|e| ParseError::Io {
        file: path.to_path_buf(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding {
        file: path.to_path_buf(),
        source: e,
    })
}

/// Write `text` verbatim to `path`, replacing any existing file.
pub fn write_report(path: &Path, text: &str) -> Result<(), ExportError> {
    std::fs::write(path, text.as_bytes()).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Report written");
    Ok(())
}
