//! Collaborator contracts the resolver is wired to
//!
//! Page text retrieval is the only suspending call. Highlighting and
//! navigation are fire-and-forget.

use crate::anchor::AnchorResult;
use async_trait::async_trait;
use thiserror::Error;

/// Why page text could not be produced.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("page {0} not found")]
    PageNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed page text: {0}")]
    Parse(String),

    #[error("extraction failed: {0}")]
    Backend(String),
}

/// Extracted text fragments of one page, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageText {
    pub fragments: Vec<String>,
}

impl PageText {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Fragments joined by single spaces.
    ///
    /// A separator is always inserted so words at fragment boundaries
    /// cannot fuse; normalization collapses any doubled whitespace.
    pub fn concatenated(&self) -> String {
        self.fragments.join(" ")
    }
}

impl From<Vec<String>> for PageText {
    fn from(fragments: Vec<String>) -> Self {
        Self::new(fragments)
    }
}

/// Source of extracted page text (1-based page numbers).
#[async_trait]
pub trait PageTextProvider: Send + Sync {
    async fn page_text(&self, page: u32) -> Result<PageText, ExtractionError>;
}

/// Keyword highlighter of the document viewer.
pub trait Highlighter: Send + Sync {
    fn clear_highlights(&self);

    fn highlight(&self, anchors: &AnchorResult);
}

/// Page navigation of the document viewer.
pub trait Navigator: Send + Sync {
    /// Jump to a zero-based page index.
    fn jump_to_page(&self, index: usize);
}
