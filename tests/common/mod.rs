//! Shared collaborators for resolver integration tests
//!
//! `GatedPages` holds each page's text until the test releases it, so
//! tests decide exactly when a suspended fetch resumes.

#![allow(dead_code)]

use async_trait::async_trait;
use citeanchor::{ExtractionError, MemoryPages, PageText, PageTextProvider};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Page text provider whose fetches block until released.
#[derive(Default)]
pub struct GatedPages {
    pages: HashMap<u32, (PageText, Arc<Notify>)>,
}

impl GatedPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, text: &str) -> Self {
        self.pages.insert(
            page,
            (PageText::new(vec![text.to_string()]), Arc::new(Notify::new())),
        );
        self
    }

    /// Let one pending (or the next) fetch of `page` complete.
    pub fn release(&self, page: u32) {
        if let Some((_, gate)) = self.pages.get(&page) {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl PageTextProvider for GatedPages {
    async fn page_text(&self, page: u32) -> Result<PageText, ExtractionError> {
        let (text, gate) = self
            .pages
            .get(&page)
            .ok_or(ExtractionError::PageNotFound(page))?;
        gate.notified().await;
        Ok(text.clone())
    }
}

/// Provider that counts fetches and answers from a fixed page map.
pub struct CountingPages {
    pages: MemoryPages,
    fetches: AtomicUsize,
}

impl CountingPages {
    pub fn new(pages: MemoryPages) -> Self {
        Self {
            pages,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageTextProvider for CountingPages {
    async fn page_text(&self, page: u32) -> Result<PageText, ExtractionError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.pages.page_text(page).await
    }
}

/// Provider whose every fetch fails, as a broken text layer would.
pub struct FailingPages;

#[async_trait]
impl PageTextProvider for FailingPages {
    async fn page_text(&self, page: u32) -> Result<PageText, ExtractionError> {
        Err(ExtractionError::Backend(format!("text layer for page {} failed", page)))
    }
}

pub const REPORT_PAGE_1: &str =
    "Revenue grew by 12 percent in Q3 2023, driven by strong demand for cloud services.";
pub const REPORT_PAGE_2: &str =
    "Operating costs fell as the company consolidated its \u{201C}legacy data centers\u{201D} into two regions.";
