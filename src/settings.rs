/// Per-list configuration passed in from the options page
use serde::{Deserialize, Serialize};

use crate::favicon::DEFAULT_PROBE_TIMEOUT_MS;
use crate::record::RejectionReason;
use crate::url_helper::is_url;

/// What a list holds, which decides how values are validated
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Words,
    Websites,
}

impl ListKind {
    /// Reject values that can never be list entries
    pub fn validate(self, value: &str) -> Result<(), RejectionReason> {
        if value.is_empty() {
            return Err(RejectionReason::Empty);
        }
        match self {
            ListKind::Words => Ok(()),
            ListKind::Websites if is_url(value) => Ok(()),
            ListKind::Websites => Err(RejectionReason::InvalidUrl),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConfig {
    pub kind: ListKind,
    pub add_new_items_on_top: bool,
    pub export_filename: String,
    pub probe_timeout_ms: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            kind: ListKind::Words,
            add_new_items_on_top: false,
            export_filename: "export.txt".to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

impl ListConfig {
    pub fn websites() -> Self {
        ListConfig {
            kind: ListKind::Websites,
            ..Self::default()
        }
    }
}
