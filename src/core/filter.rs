// logdiff - core/filter.rs
//
// Severity bucketing and timestamp ordering of diffed messages.
// Core layer: pure logic, no I/O.

use crate::core::model::{MessageMetadataMap, ReportLine, SeverityBucket};

/// Select the messages whose metadata severity matches `bucket` exactly.
///
/// Messages without metadata, or with any other severity, are left out.
pub fn filter_by_bucket<'a, I>(
    messages: I,
    metadata: &MessageMetadataMap,
    bucket: SeverityBucket,
) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    messages
        .into_iter()
        .filter(|message| {
            bucket.matches(
                metadata
                    .get(message.as_str())
                    .and_then(|meta| meta.severity.as_deref()),
            )
        })
        .map(String::as_str)
        .collect()
}

/// Sort messages by their timestamp text, newest (lexicographically greatest)
/// first. The sort is stable; a missing timestamp sorts as the empty string.
pub fn sort_by_timestamp_desc(messages: &mut [&str], metadata: &MessageMetadataMap) {
    messages.sort_by(|a, b| timestamp_of(metadata, b).cmp(timestamp_of(metadata, a)));
}

fn timestamp_of<'m>(metadata: &'m MessageMetadataMap, message: &str) -> &'m str {
    metadata
        .get(message)
        .map(|meta| meta.timestamp_text())
        .unwrap_or("")
}

/// Filter, sort, and format one report section.
pub fn section_lines<'a, I>(
    messages: I,
    metadata: &MessageMetadataMap,
    bucket: SeverityBucket,
) -> Vec<ReportLine>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut selected = filter_by_bucket(messages, metadata, bucket);
    sort_by_timestamp_desc(&mut selected, metadata);
    selected
        .into_iter()
        .map(|message| ReportLine::new(message, metadata.get(message)))
        .collect()
}
