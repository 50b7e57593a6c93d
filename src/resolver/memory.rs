//! In-process collaborators: a page map and a call-recording viewer
//!
//! Used by the CLI to run resolutions outside a real viewer, and by tests.

use super::traits::{ExtractionError, Highlighter, Navigator, PageText, PageTextProvider};
use crate::anchor::AnchorResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Deserialize)]
#[serde(untagged)]
enum PagesFile {
    Bare(Vec<Vec<String>>),
    Wrapped { pages: Vec<Vec<String>> },
}

/// Page text held in memory, keyed by 1-based page number.
#[derive(Debug, Clone, Default)]
pub struct MemoryPages {
    pages: HashMap<u32, PageText>,
}

impl MemoryPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, fragments: Vec<String>) -> Self {
        self.insert(page, fragments);
        self
    }

    pub fn insert(&mut self, page: u32, fragments: Vec<String>) {
        self.pages.insert(page, PageText::new(fragments));
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Parse `[[fragment, ...], ...]` or `{"pages": [[...], ...]}`.
    ///
    /// The first inner list is page 1.
    pub fn from_json_str(json: &str) -> Result<Self, ExtractionError> {
        let file: PagesFile =
            serde_json::from_str(json).map_err(|e| ExtractionError::Parse(e.to_string()))?;
        let pages = match file {
            PagesFile::Bare(pages) | PagesFile::Wrapped { pages } => pages,
        };

        let mut memory = Self::new();
        for (i, fragments) in pages.into_iter().enumerate() {
            let page = u32::try_from(i + 1)
                .map_err(|_| ExtractionError::Parse("too many pages".to_string()))?;
            memory.insert(page, fragments);
        }
        Ok(memory)
    }

    pub fn load(path: &Path) -> Result<Self, ExtractionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[async_trait]
impl PageTextProvider for MemoryPages {
    async fn page_text(&self, page: u32) -> Result<PageText, ExtractionError> {
        self.pages
            .get(&page)
            .cloned()
            .ok_or(ExtractionError::PageNotFound(page))
    }
}

/// One call made on the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ViewerCall {
    JumpToPage { index: usize },
    ClearHighlights,
    Highlight { anchors: AnchorResult },
}

/// A viewer stand-in that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    calls: Mutex<Vec<ViewerCall>>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<ViewerCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<ViewerCall> {
        self.log().clone()
    }

    /// Page index of the last jump.
    pub fn current_page(&self) -> Option<usize> {
        self.log().iter().rev().find_map(|call| match call {
            ViewerCall::JumpToPage { index } => Some(*index),
            _ => None,
        })
    }

    /// Highlights currently on screen: the last `highlight` not followed
    /// by a `clear_highlights`.
    pub fn current_highlights(&self) -> Option<AnchorResult> {
        for call in self.log().iter().rev() {
            match call {
                ViewerCall::Highlight { anchors } => return Some(anchors.clone()),
                ViewerCall::ClearHighlights => return None,
                ViewerCall::JumpToPage { .. } => {}
            }
        }
        None
    }
}

impl Highlighter for RecordingViewer {
    fn clear_highlights(&self) {
        self.log().push(ViewerCall::ClearHighlights);
    }

    fn highlight(&self, anchors: &AnchorResult) {
        self.log().push(ViewerCall::Highlight {
            anchors: anchors.clone(),
        });
    }
}

impl Navigator for RecordingViewer {
    fn jump_to_page(&self, index: usize) {
        self.log().push(ViewerCall::JumpToPage { index });
    }
}
