// logdiff - core/pairing.rs
//
// Recursive directory traversal and pairing of per-host log files across the
// older and newer snapshot directories.
//
// This module uses `walkdir` for traversal and reads only directory entries,
// never file contents.
//
// Behaviour:
//   - Walk errors (including a missing root) are non-fatal and collected as
//     warnings; the affected directory simply contributes no files.
//   - A root that exists but is not a directory contributes no files either;
//     a single log file given in place of a directory is not paired.
//   - File names are compared lossily, so a non-UTF-8 name still takes part.
//   - Entries are visited in file-name order so last-write-wins within one
//     directory is deterministic.
//   - Hosts missing from either snapshot stay in the map but are not complete;
//     callers skip them.

use crate::core::model::{HostLogPair, Snapshot};
use crate::util::constants;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for one pairing operation.
#[derive(Debug, Clone)]
pub struct PairingConfig {
    /// Maximum directory recursion depth.
    pub max_depth: usize,

    /// Glob patterns (filename-only) a file must match to take part.
    pub include_patterns: Vec<String>,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            max_depth: constants::DEFAULT_MAX_DEPTH,
            include_patterns: constants::DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Host id to its older/newer files, ordered by host id.
pub type HostPairs = BTreeMap<String, HostLogPair>;

/// Outcome of pairing two directories.
#[derive(Debug, Default)]
pub struct PairingResult {
    /// Every host seen in either directory.
    pub pairs: HostPairs,

    /// Non-fatal traversal problems, human readable.
    pub warnings: Vec<String>,
}

impl PairingResult {
    /// Pairs with both an older and a newer file, in host id order.
    pub fn complete_pairs(&self) -> impl Iterator<Item = &HostLogPair> {
        self.pairs.values().filter(|p| p.is_complete())
    }

    /// Host ids present in only one of the two directories.
    pub fn unpaired_hosts(&self) -> Vec<&str> {
        self.pairs
            .values()
            .filter(|p| !p.is_complete())
            .map(|p| p.host_id.as_str())
            .collect()
    }
}

// =============================================================================
// Host identifiers
// =============================================================================

/// Derive the host identifier from a log file name: the text before the first
/// `_`. A name without `_` is used whole as the identifier.
pub fn host_id_from_file_name(file_name: &str) -> &str {
    match file_name.split_once(constants::HOST_ID_SEPARATOR) {
        Some((host_id, _)) => host_id,
        None => {
            tracing::debug!(
                file = file_name,
                "No host separator in file name; using whole name as host id"
            );
            file_name
        }
    }
}

// =============================================================================
// Pairing
// =============================================================================

/// Walk both directories and pair their log files by host identifier.
pub fn pair_host_logs(older_dir: &Path, newer_dir: &Path, config: &PairingConfig) -> PairingResult {
    let max_depth = config.max_depth.min(constants::ABSOLUTE_MAX_DEPTH);
    let include_pats = compile_patterns(&config.include_patterns);

    let mut result = PairingResult::default();
    for (dir, snapshot) in [(older_dir, Snapshot::Older), (newer_dir, Snapshot::Newer)] {
        let (files, warnings) = discover_log_files(dir, max_depth, &include_pats);
        tracing::debug!(
            dir = %dir.display(),
            snapshot = snapshot.label(),
            files = files.len(),
            "Log files discovered"
        );

        for path in files {
            let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
                continue;
            };
            let host_id = host_id_from_file_name(&file_name).to_string();
            let pair = result
                .pairs
                .entry(host_id.clone())
                .or_insert_with(|| HostLogPair::new(host_id));
            let slot = match snapshot {
                Snapshot::Older => &mut pair.older_path,
                Snapshot::Newer => &mut pair.newer_path,
            };
            if let Some(previous) = slot.replace(path) {
                tracing::debug!(
                    host = %pair.host_id,
                    replaced = %previous.display(),
                    snapshot = snapshot.label(),
                    "Duplicate host file; later file wins"
                );
            }
        }
        result.warnings.extend(warnings);
    }

    tracing::debug!(
        hosts = result.pairs.len(),
        complete = result.complete_pairs().count(),
        unpaired = ?result.unpaired_hosts(),
        "Host pairing complete"
    );

    result
}

/// Collect matching files under `root`, in walk order.
fn discover_log_files(
    root: &Path,
    max_depth: usize,
    include_pats: &[glob::Pattern],
) -> (Vec<PathBuf>, Vec<String>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    if let Ok(meta) = std::fs::metadata(root) {
        if !meta.is_dir() {
            let msg = format!("Skipping '{}': not a directory", root.display());
            tracing::debug!(warning = %msg, "Pairing warning");
            warnings.push(msg);
            return (files, warnings);
        }
    }

    let walker = walkdir::WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Pairing warning");
                warnings.push(msg);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy();
        if !is_included(&file_name, include_pats) {
            tracing::trace!(file = %file_name, "Not matched by include patterns");
            continue;
        }

        files.push(path.to_path_buf());
    }

    (files, warnings)
}

// =============================================================================
// Glob helpers
// =============================================================================

/// Compile glob pattern strings. Patterns that fail to compile are logged and
/// skipped.
fn compile_patterns(patterns: &[String]) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::warn!(pattern = p, error = %e, "Invalid glob pattern, skipping");
                None
            }
        })
        .collect()
}

/// Returns true if `file_name` matches at least one include pattern.
fn is_included(file_name: &str, include_pats: &[glob::Pattern]) -> bool {
    include_pats.iter().any(|p| p.matches(file_name))
}

// =============================================================================
// Tests
// =============================================================================
