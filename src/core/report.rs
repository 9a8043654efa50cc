// logdiff - core/report.rs
//
// Builds the per-host report sections and renders the plain-text report.
// Core layer: pure logic, no I/O.
//
// Severity for every section, including the "last" (overlapping) ones, is
// read from the newer log's metadata only.

use crate::core::diff::diff_messages;
use crate::core::filter::section_lines;
use crate::core::model::{ExtractedLog, HostReport, Report, SectionKind};
use crate::util::constants;

/// Diff one host's logs and format its four sections.
pub fn build_host_report(host_id: &str, older: &ExtractedLog, newer: &ExtractedLog) -> HostReport {
    let diff = diff_messages(older, newer);
    let metadata = &newer.metadata;

    let mut report = HostReport {
        host_id: host_id.to_string(),
        ..Default::default()
    };
    for kind in SectionKind::all() {
        let messages = if kind.is_new() {
            &diff.new
        } else {
            &diff.overlapping
        };
        *report.section_mut(*kind) = section_lines(messages, metadata, kind.bucket());
    }

    tracing::debug!(
        host = host_id,
        new = diff.new.len(),
        overlapping = diff.overlapping.len(),
        reported = report.line_count(),
        "Host report built"
    );

    report
}

fn new_banner(host_id: &str) -> String {
    format!(
        "\n\n{}New Log Messages for {host_id}{}",
        constants::BANNER_LEAD,
        constants::NEW_BANNER_TAIL
    )
}

fn last_banner(host_id: &str) -> String {
    format!(
        "\n\n{}Last Log Messages for {host_id}{}",
        constants::BANNER_LEAD,
        constants::LAST_BANNER_TAIL
    )
}

/// Render one section's lines, joined by newlines. Empty when no lines.
fn render_block(host: &HostReport, kind: SectionKind) -> String {
    host.section(kind)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The text chunks for one host, in output order.
fn host_chunks(host: &HostReport) -> Vec<String> {
    let mut chunks = Vec::with_capacity(10);
    for kind in SectionKind::all() {
        match kind {
            SectionKind::NewWarnings => chunks.push(new_banner(&host.host_id)),
            SectionKind::LastWarnings => chunks.push(last_banner(&host.host_id)),
            SectionKind::NewCriticals | SectionKind::LastCriticals => {}
        }
        chunks.push(format!("\n{}", kind.header()));
        chunks.push(render_block(host, *kind));
    }
    chunks
}

impl Report {
    /// Render the plain-text report. Every chunk (banner, header, block) is
    /// joined with a newline across all hosts; an empty report renders as "".
    pub fn render(&self) -> String {
        self.hosts
            .iter()
            .flat_map(host_chunks)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total reported lines across all hosts.
    pub fn line_count(&self) -> usize {
        self.hosts.iter().map(HostReport::line_count).sum()
    }
}
