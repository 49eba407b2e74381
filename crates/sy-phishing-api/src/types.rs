/// Types for the recent-changes feed.
///
/// The feed reports batches of domains added to or removed from the database.
/// The change kind stays a plain string rather than a closed enum: the filter
/// helpers match the two documented kinds case-insensitively and anything
/// else passes through a `ChangeRecord` untouched.
use serde::{Deserialize, Serialize};

/// One entry in the recent-changes feed.
///
/// The wire field is named `type`; each record carries the batch of domains
/// the change applied to, in feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub domains: Vec<String>,
}

impl ChangeRecord {
    /// True when this record added domains to the database.
    pub fn is_addition(&self) -> bool {
        self.kind.eq_ignore_ascii_case("add")
    }

    /// True when this record removed domains from the database.
    pub fn is_removal(&self) -> bool {
        self.kind.eq_ignore_ascii_case("delete")
    }
}
