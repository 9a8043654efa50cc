// logdiff - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logdiff";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Discovery
// =============================================================================

/// Default include pattern: only `.log` files take part in pairing.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["*.log"];

/// Default maximum directory recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard upper bound on max depth (prevents configuration mistakes).
pub const ABSOLUTE_MAX_DEPTH: usize = 256;

/// Separator between the host identifier and the rest of a log file name.
pub const HOST_ID_SEPARATOR: char = '_';

// =============================================================================
// Log record markers
// =============================================================================

/// Prefix of the line that carries a record's message text.
pub const MESSAGE_MARKER: &str = "Message";

/// Prefix of the line that carries a record's severity.
pub const SEVERITY_MARKER: &str = "Severity";

/// Prefix of the line that carries a record's timestamp.
pub const TIMESTAMP_MARKER: &str = "Timestamp";

/// Separator between key and value on a marker line.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// Report
// =============================================================================

/// Severity value placed in the warning buckets (exact, case-sensitive).
pub const WARNING_LABEL: &str = "Warning";

/// Severity value placed in the critical buckets (exact, case-sensitive).
pub const CRITICAL_LABEL: &str = "Critical";

/// Dashes preceding the host name in both section banners.
pub const BANNER_LEAD: &str = "-----------------------------------";

/// Dashes trailing the "New Log Messages" banner.
pub const NEW_BANNER_TAIL: &str = "-----------------------------------------";

/// Dashes trailing the "Last Log Messages" banner.
pub const LAST_BANNER_TAIL: &str = "----------------------------------------";

/// Name of the report file written into the newer directory when saving.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "new_messages_output.txt";

/// Interactive save prompt shown when neither --save nor --no-save is given.
pub const SAVE_PROMPT: &str = "Do you want to save the output messages to a file? (y/n): ";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept quiet so stderr stays clean next to the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in the `[logging]` config section.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
