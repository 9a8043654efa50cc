// logdiff - core/export.rs
//
// CSV and JSON export of the structured report.
// Core layer: writes to any Write trait object.

use crate::core::model::{Report, SectionKind};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export the report to CSV, one row per reported line.
///
/// Writes: host, section, timestamp, severity, message
pub fn export_csv<W: Write>(
    report: &Report,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["host", "section", "timestamp", "severity", "message"])
        .map_err(csv_err)?;

    let mut count = 0;
    for host in &report.hosts {
        for kind in SectionKind::all() {
            for line in host.section(*kind) {
                csv_writer
                    .write_record([
                        host.host_id.as_str(),
                        kind.id(),
                        line.timestamp.as_str(),
                        line.severity.as_str(),
                        line.message.as_str(),
                    ])
                    .map_err(csv_err)?;
                count += 1;
            }
        }
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export the report to pretty-printed JSON.
pub fn export_json<W: Write>(
    report: &Report,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, report).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(report.line_count())
}
