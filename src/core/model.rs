// logdiff - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

// =============================================================================
// Extracted records
// =============================================================================

/// One record closed by a `Message` line, carrying whatever severity and
/// timestamp were pending when the message was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub severity: Option<String>,
    pub timestamp: Option<String>,
}

/// Last-seen severity and timestamp for a message text.
///
/// Either field is `None` when the record closed without that marker having
/// been seen; rendering treats `None` as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMetadata {
    pub severity: Option<String>,
    pub timestamp: Option<String>,
}

impl MessageMetadata {
    /// Severity as text, empty when unset.
    pub fn severity_text(&self) -> &str {
        self.severity.as_deref().unwrap_or("")
    }

    /// Timestamp as text, empty when unset.
    pub fn timestamp_text(&self) -> &str {
        self.timestamp.as_deref().unwrap_or("")
    }
}

impl From<&LogRecord> for MessageMetadata {
    fn from(record: &LogRecord) -> Self {
        Self {
            severity: record.severity.clone(),
            timestamp: record.timestamp.clone(),
        }
    }
}

/// Distinct message bodies from one log file.
///
/// Ordered so that set algebra and the subsequent stable sort give the same
/// report on every run.
pub type MessageSet = BTreeSet<String>;

/// Message text to its last-seen metadata.
pub type MessageMetadataMap = HashMap<String, MessageMetadata>;

/// Everything extracted from one log file.
#[derive(Debug, Clone, Default)]
pub struct ExtractedLog {
    pub messages: MessageSet,
    pub metadata: MessageMetadataMap,
}

impl ExtractedLog {
    /// Record a closed record. A repeated message keeps one set entry and its
    /// metadata is overwritten by the later record.
    pub fn insert(&mut self, record: &LogRecord) {
        self.metadata
            .insert(record.message.clone(), MessageMetadata::from(record));
        self.messages.insert(record.message.clone());
    }

    /// Metadata for `message`, if it was extracted from this file.
    pub fn metadata_for(&self, message: &str) -> Option<&MessageMetadata> {
        self.metadata.get(message)
    }
}

// =============================================================================
// Host pairing
// =============================================================================

/// The older and newer log file found for one host identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostLogPair {
    pub host_id: String,
    pub older_path: Option<PathBuf>,
    pub newer_path: Option<PathBuf>,
}

impl HostLogPair {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            ..Default::default()
        }
    }

    /// Both paths, or `None` when either directory lacked a file for the host.
    pub fn complete(&self) -> Option<(&Path, &Path)> {
        match (&self.older_path, &self.newer_path) {
            (Some(older), Some(newer)) => Some((older.as_path(), newer.as_path())),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }
}

/// Which snapshot a directory represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    Older,
    Newer,
}

impl Snapshot {
    pub fn label(&self) -> &'static str {
        match self {
            Snapshot::Older => "older",
            Snapshot::Newer => "newer",
        }
    }
}

// =============================================================================
// Severity buckets
// =============================================================================

/// Severity classes that appear in the report.
///
/// Classification is an exact, case-sensitive match on the raw severity text;
/// anything else (including a missing severity) belongs to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeverityBucket {
    Warning,
    Critical,
}

impl SeverityBucket {
    /// The exact severity text selecting this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBucket::Warning => constants::WARNING_LABEL,
            SeverityBucket::Critical => constants::CRITICAL_LABEL,
        }
    }

    pub fn matches(&self, severity: Option<&str>) -> bool {
        severity == Some(self.label())
    }
}

impl std::fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Report
// =============================================================================

/// The four per-host report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    NewWarnings,
    NewCriticals,
    LastWarnings,
    LastCriticals,
}

impl SectionKind {
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::NewWarnings,
            SectionKind::NewCriticals,
            SectionKind::LastWarnings,
            SectionKind::LastCriticals,
        ]
    }

    /// Header line emitted above the section's block.
    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::NewWarnings => "[New Warnings]",
            SectionKind::NewCriticals => "[New Criticals]",
            SectionKind::LastWarnings => "[Last Warnings]",
            SectionKind::LastCriticals => "[Last Criticals]",
        }
    }

    /// Stable identifier used by the CSV export.
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::NewWarnings => "new_warnings",
            SectionKind::NewCriticals => "new_criticals",
            SectionKind::LastWarnings => "last_warnings",
            SectionKind::LastCriticals => "last_criticals",
        }
    }

    /// True for sections listing messages absent from the older log.
    pub fn is_new(&self) -> bool {
        matches!(self, SectionKind::NewWarnings | SectionKind::NewCriticals)
    }

    pub fn bucket(&self) -> SeverityBucket {
        match self {
            SectionKind::NewWarnings | SectionKind::LastWarnings => SeverityBucket::Warning,
            SectionKind::NewCriticals | SectionKind::LastCriticals => SeverityBucket::Critical,
        }
    }
}

/// One formatted report line. Missing metadata is carried as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub timestamp: String,
    pub severity: String,
    pub message: String,
}

impl ReportLine {
    pub fn new(message: &str, metadata: Option<&MessageMetadata>) -> Self {
        let metadata = metadata.cloned().unwrap_or_default();
        Self {
            timestamp: metadata.timestamp_text().to_string(),
            severity: metadata.severity_text().to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.timestamp, self.severity, self.message)
    }
}

/// Report sections for one complete host pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub host_id: String,
    pub new_warnings: Vec<ReportLine>,
    pub new_criticals: Vec<ReportLine>,
    pub last_warnings: Vec<ReportLine>,
    pub last_criticals: Vec<ReportLine>,
}

impl HostReport {
    pub fn section(&self, kind: SectionKind) -> &[ReportLine] {
        match kind {
            SectionKind::NewWarnings => &self.new_warnings,
            SectionKind::NewCriticals => &self.new_criticals,
            SectionKind::LastWarnings => &self.last_warnings,
            SectionKind::LastCriticals => &self.last_criticals,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Vec<ReportLine> {
        match kind {
            SectionKind::NewWarnings => &mut self.new_warnings,
            SectionKind::NewCriticals => &mut self.new_criticals,
            SectionKind::LastWarnings => &mut self.last_warnings,
            SectionKind::LastCriticals => &mut self.last_criticals,
        }
    }

    /// Total number of lines across all four sections.
    pub fn line_count(&self) -> usize {
        SectionKind::all()
            .iter()
            .map(|kind| self.section(*kind).len())
            .sum()
    }
}

/// Whole-run report, one entry per complete host pair in pairing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub hosts: Vec<HostReport>,
}
