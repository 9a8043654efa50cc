// logdiff - app/driver.rs
//
// Run lifecycle: pair the two snapshot directories, extract and diff each
// complete host pair, and build the report. Saving is a separate step so the
// caller can print the report before persisting it.
//
// The first fatal error (unreadable file, bad encoding, malformed marker
// line) aborts the whole run; there is no per-host recovery. Unpaired hosts
// and walk problems are non-fatal and only logged.

use crate::core::model::{ExtractedLog, Report};
use crate::core::pairing::{self, PairingConfig};
use crate::core::{parser, report};
use crate::platform;
use crate::util::constants;
use crate::util::error::Result;
use std::path::{Path, PathBuf};

/// Everything one run needs. The driver never prompts; the caller decides
/// `save_output` up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Older snapshot directory.
    pub older_dir: PathBuf,

    /// Newer snapshot directory; also receives the saved report.
    pub newer_dir: PathBuf,

    /// Write the rendered report into `newer_dir` when true.
    pub save_output: bool,

    /// Directory walk settings.
    pub pairing: PairingConfig,

    /// File name of the saved report inside `newer_dir`.
    pub output_file_name: String,
}

impl RunConfig {
    pub fn new(older_dir: impl Into<PathBuf>, newer_dir: impl Into<PathBuf>) -> Self {
        Self {
            older_dir: older_dir.into(),
            newer_dir: newer_dir.into(),
            save_output: false,
            pairing: PairingConfig::default(),
            output_file_name: constants::DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }

    /// Where the report is written when saving.
    pub fn output_path(&self) -> PathBuf {
        self.newer_dir.join(&self.output_file_name)
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Structured report, for exports.
    pub report: Report,

    /// Rendered plain-text report.
    pub text: String,

    /// Non-fatal directory walk warnings.
    pub warnings: Vec<String>,
}

/// Read and extract one log file.
fn load_log(path: &Path) -> Result<ExtractedLog> {
    let content = platform::fs::read_log_file(path)?;
    Ok(parser::extract_messages(&content, path)?)
}

/// Build the report for two snapshot directories without writing anything.
pub fn build_report(
    older_dir: &Path,
    newer_dir: &Path,
    config: &PairingConfig,
) -> Result<(Report, Vec<String>)> {
    let paired = pairing::pair_host_logs(older_dir, newer_dir, config);

    let mut hosts = Vec::new();
    for pair in paired.pairs.values() {
        let Some((older_path, newer_path)) = pair.complete() else {
            tracing::debug!(host = %pair.host_id, "Host present in one snapshot only; skipped");
            continue;
        };

        tracing::debug!(
            host = %pair.host_id,
            older = %older_path.display(),
            newer = %newer_path.display(),
            "Comparing host logs"
        );
        let older = load_log(older_path)?;
        let newer = load_log(newer_path)?;
        hosts.push(report::build_host_report(&pair.host_id, &older, &newer));
    }

    Ok((Report { hosts }, paired.warnings))
}

/// Build and render the report. Writes nothing.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    tracing::info!(
        older = %config.older_dir.display(),
        newer = %config.newer_dir.display(),
        save = config.save_output,
        "Run starting"
    );

    let (report, warnings) = build_report(&config.older_dir, &config.newer_dir, &config.pairing)?;
    let text = report.render();

    tracing::info!(
        hosts = report.hosts.len(),
        lines = report.line_count(),
        "Run complete"
    );

    Ok(RunOutcome {
        report,
        text,
        warnings,
    })
}

/// Write the rendered report into the newer directory when saving was
/// requested, replacing any existing file. Returns the written path.
pub fn save_report(config: &RunConfig, text: &str) -> Result<Option<PathBuf>> {
    if !config.save_output {
        return Ok(None);
    }
    let path = config.output_path();
    platform::fs::write_report(&path, text)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::{LogDiffError, ParseError};
    use std::fs;

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let older = dir.path().join("20241101");
        let newer = dir.path().join("20241201");
        fs::create_dir(&older).unwrap();
        fs::create_dir(&newer).unwrap();
        (dir, older, newer)
    }

    #[test]
    fn test_run_without_save_writes_nothing() {
        let (_dir, older, newer) = setup();
        fs::write(older.join("h_1.log"), "Severity = Warning\nMessage = a\n").unwrap();
        fs::write(newer.join("h_2.log"), "Severity = Warning\nMessage = b\n").unwrap();

        let config = RunConfig::new(&older, &newer);
        let outcome = run(&config).unwrap();
        assert_eq!(save_report(&config, &outcome.text).unwrap(), None);
        assert!(!newer.join("new_messages_output.txt").exists());
        assert_eq!(outcome.report.hosts[0].new_warnings[0].message, "b");
    }

    #[test]
    fn test_run_with_save_writes_identical_text() {
        let (_dir, older, newer) = setup();
        fs::write(older.join("h_1.log"), "").unwrap();
        fs::write(newer.join("h_2.log"), "Severity = Critical\nMessage = c\n").unwrap();
        fs::write(newer.join("new_messages_output.txt"), "stale").unwrap();

        let config = RunConfig {
            save_output: true,
            ..RunConfig::new(&older, &newer)
        };
        let outcome = run(&config).unwrap();
        assert_eq!(
            fs::read_to_string(newer.join("new_messages_output.txt")).unwrap(),
            "stale",
            "run itself must not write the report"
        );
        let saved = save_report(&config, &outcome.text)
            .unwrap()
            .expect("saved path");
        assert_eq!(saved, newer.join("new_messages_output.txt"));
        assert_eq!(fs::read_to_string(saved).unwrap(), outcome.text);
    }

    #[test]
    fn test_malformed_line_aborts_run() {
        let (_dir, older, newer) = setup();
        fs::write(older.join("a_1.log"), "Message = ok\n").unwrap();
        fs::write(newer.join("a_2.log"), "Message ok\n").unwrap();

        let err = run(&RunConfig::new(&older, &newer)).unwrap_err();
        assert!(matches!(
            err,
            LogDiffError::Parse(ParseError::MalformedLogLine { .. })
        ));
    }

    #[test]
    fn test_unpaired_host_not_read() {
        let (_dir, older, newer) = setup();
        // A malformed file for a host without a partner is never parsed.
        fs::write(older.join("lonely_1.log"), "Message broken\n").unwrap();

        let outcome = run(&RunConfig::new(&older, &newer)).unwrap();
        assert!(outcome.report.hosts.is_empty());
        assert_eq!(outcome.text, "");
    }

    #[test]
    fn test_missing_directories_give_empty_report() {
        let (dir, _, _) = setup();
        let outcome = run(&RunConfig::new(dir.path().join("x"), dir.path().join("y"))).unwrap();
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[test]
    fn test_failed_save_is_export_error() {
        let (_dir, older, newer) = setup();
        fs::create_dir(newer.join("new_messages_output.txt")).unwrap();

        let config = RunConfig {
            save_output: true,
            ..RunConfig::new(&older, &newer)
        };
        let outcome = run(&config).unwrap();
        let err = save_report(&config, &outcome.text).unwrap_err();
        assert!(matches!(err, LogDiffError::Export(_)), "got {err:?}");
    }
}
