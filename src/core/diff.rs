// logdiff - core/diff.rs
//
// Set differences between the older and newer extraction of one host.
// Core layer: pure logic.

use crate::core::model::{ExtractedLog, MessageSet};

/// Messages of the newer log split by whether the older log also had them.
///
/// `new` and `overlapping` are disjoint and together equal the newer log's
/// message set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDiff {
    /// In the newer log only.
    pub new: MessageSet,

    /// In both logs.
    pub overlapping: MessageSet,
}

/// Diff `newer` against `older`, using the newer message set as universe.
pub fn diff_messages(older: &ExtractedLog, newer: &ExtractedLog) -> MessageDiff {
    let (overlapping, new): (MessageSet, MessageSet) = newer
        .messages
        .iter()
        .cloned()
        .partition(|message| older.messages.contains(message));

    MessageDiff { new, overlapping }
}
