//! Per-source clustering of citations for display

use super::types::Citation;
use serde::Serialize;
use std::collections::HashMap;

/// Key for citations with neither a document id nor a source.
pub const UNKNOWN_SOURCE_KEY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationGroup {
    pub key: String,
    /// Display name: the first member's source, else the key
    pub source: String,
    pub quotes: Vec<Citation>,
}

/// Group citations by document id, then source, then the placeholder key.
///
/// Groups appear in first-seen order and members keep their input order.
pub fn group_citations(citations: &[Citation]) -> Vec<CitationGroup> {
    let mut groups: Vec<CitationGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for citation in citations {
        let key = citation.grouping_key().unwrap_or(UNKNOWN_SOURCE_KEY);
        match index.get(key) {
            Some(&slot) => groups[slot].quotes.push(citation.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(CitationGroup {
                    key: key.to_string(),
                    source: citation.source.clone().unwrap_or_else(|| key.to_string()),
                    quotes: vec![citation.clone()],
                });
            }
        }
    }

    groups
}
