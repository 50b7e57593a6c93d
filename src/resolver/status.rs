//! Observable outcome of the latest resolution
//!
//! The user never sees these; they exist so callers and tests can tell a
//! failed fetch from an honest miss.

use crate::anchor::AnchorResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Citation had no page; nothing was done
    InvalidCitation,
    /// Anchors were found and handed to the highlighter
    Highlighted { page: u32, anchors: AnchorResult },
    /// Page text was available but no anchor was verified
    NoMatch { page: u32 },
    /// Page text could not be retrieved
    Failed { page: u32, reason: String },
    /// A newer resolution started while this one was fetching
    Superseded { page: u32 },
}

impl ResolutionStatus {
    /// True if this resolution left a highlight on screen.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Highlighted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorKeyword;

    #[test]
    fn serializes_with_status_tag() {
        let status = ResolutionStatus::Highlighted {
            page: 2,
            anchors: AnchorResult::from(vec![AnchorKeyword::new("strong demand")]),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "highlighted");
        assert_eq!(json["page"], 2);
        assert_eq!(json["anchors"][0]["keyword"], "strong demand");
        assert!(status.is_highlighted());
    }

    #[test]
    fn failure_is_not_highlighted() {
        let status = ResolutionStatus::Failed {
            page: 1,
            reason: "boom".to_string(),
        };
        assert!(!status.is_highlighted());
        assert_eq!(serde_json::to_value(&status).unwrap()["status"], "failed");
    }
}
