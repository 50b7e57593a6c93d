//! Anchor value types handed to the highlighter

use serde::{Deserialize, Serialize};

/// One keyword for the highlighter.
///
/// Serializes with the highlighter's field names (`keyword`, `matchCase`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorKeyword {
    pub keyword: String,
    #[serde(rename = "matchCase")]
    pub match_case: bool,
}

impl AnchorKeyword {
    /// A case-insensitive keyword, the only kind the resolver produces.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            match_case: false,
        }
    }
}

/// Ordered anchors for one citation. Empty means no verifiable anchor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorResult(Vec<AnchorKeyword>);

impl AnchorResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, keyword: AnchorKeyword) {
        self.0.push(keyword);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnchorKeyword> {
        self.0.iter()
    }

    /// Keyword strings in discovery order.
    pub fn keywords(&self) -> Vec<&str> {
        self.0.iter().map(|k| k.keyword.as_str()).collect()
    }

    pub fn into_inner(self) -> Vec<AnchorKeyword> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AnchorResult {
    type Item = &'a AnchorKeyword;
    type IntoIter = std::slice::Iter<'a, AnchorKeyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<AnchorKeyword>> for AnchorResult {
    fn from(keywords: Vec<AnchorKeyword>) -> Self {
        Self(keywords)
    }
}
