//! AnchorResolver: click on a citation → jump, fetch, search, highlight
//!
//! Per call: `Idle → FetchingPageText → {Matching → Highlighted | NoMatch} | Failed`.
//! A call whose generation was overtaken while fetching ends as
//! `Superseded` and leaves the viewer alone, so the last click wins
//! regardless of which fetch returns last.

use super::generation::GenerationCounter;
use super::status::ResolutionStatus;
use super::traits::{Highlighter, Navigator, PageTextProvider};
use crate::anchor::{AnchorResult, WindowSearch};
use crate::citation::Citation;
use crate::config::{ConfigError, ResolverConfig};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolves citations against one document viewer.
pub struct AnchorResolver {
    pages: Arc<dyn PageTextProvider>,
    highlighter: Arc<dyn Highlighter>,
    navigator: Arc<dyn Navigator>,
    search: WindowSearch,
    settle_delay: Duration,
    generations: GenerationCounter,
    /// Status of the newest generation that has finished, with its id
    last_status: Mutex<Option<(u64, ResolutionStatus)>>,
}

impl AnchorResolver {
    pub fn new(
        pages: Arc<dyn PageTextProvider>,
        highlighter: Arc<dyn Highlighter>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            pages,
            highlighter,
            navigator,
            search: WindowSearch::default(),
            settle_delay: Duration::ZERO,
            generations: GenerationCounter::new(),
            last_status: Mutex::new(None),
        }
    }

    /// Apply window bounds and settle delay from configuration.
    pub fn with_config(mut self, config: &ResolverConfig) -> Result<Self, ConfigError> {
        self.search = config.window_search()?;
        self.settle_delay = config.settle_delay();
        Ok(self)
    }

    /// Outcome of the most recent generation to finish.
    pub fn last_status(&self) -> Option<ResolutionStatus> {
        self.last_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, status)| status.clone())
    }

    /// Jump to the citation's page and highlight its verified anchors.
    ///
    /// Never fails from the caller's point of view: a missing page is a
    /// no-op, and extraction errors or misses leave the page unhighlighted.
    pub async fn resolve_and_highlight(&self, citation: &Citation) {
        let Some(page) = citation.valid_page() else {
            debug!(page = ?citation.page, "citation has no usable page; ignoring");
            self.record(self.generations.latest(), ResolutionStatus::InvalidCitation);
            return;
        };

        let generation = self.generations.begin();
        self.navigator.jump_to_page((page - 1) as usize);

        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }

        let outcome = match self.pages.page_text(page).await {
            Err(e) => {
                warn!(page, generation, error = %e, "page text unavailable; no highlight");
                Err(e.to_string())
            }
            Ok(text) => Ok(match citation.content.as_deref() {
                Some(quote) => self.search.search(quote, &text.concatenated()),
                None => {
                    debug!(page, "citation has no content; nothing to match");
                    AnchorResult::new()
                }
            }),
        };

        if !self.generations.is_current(generation) {
            debug!(page, generation, "resolution superseded; discarding result");
            self.record(generation, ResolutionStatus::Superseded { page });
            return;
        }

        self.highlighter.clear_highlights();
        let status = match outcome {
            Err(reason) => ResolutionStatus::Failed { page, reason },
            Ok(anchors) if anchors.is_empty() => {
                debug!(page, "no verbatim anchor found");
                ResolutionStatus::NoMatch { page }
            }
            Ok(anchors) => {
                self.highlighter.highlight(&anchors);
                info!(page, anchors = anchors.len(), "citation highlighted");
                ResolutionStatus::Highlighted { page, anchors }
            }
        };
        self.record(generation, status);
    }

    fn record(&self, generation: u64, status: ResolutionStatus) {
        let mut slot = self.last_status.lock().unwrap_or_else(PoisonError::into_inner);
        let newer = slot.as_ref().map_or(true, |(stored, _)| generation >= *stored);
        if newer {
            *slot = Some((generation, status));
        }
    }
}
