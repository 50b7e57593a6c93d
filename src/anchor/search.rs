//! Window search: locate verbatim runs of a quote inside page text
//!
//! The normalized quote is scanned with word windows from the largest size
//! down to the smallest. The first size that matches anything wins and no
//! smaller size is tried. Within a pass, matches never overlap: a hit
//! consumes its words and scanning resumes after them.
//!
//! Quotes shorter than the smallest window get one whole-quote containment
//! check instead.

use super::normalize::{normalize, NormalizedText};
use super::types::{AnchorKeyword, AnchorResult};
use crate::config::ConfigError;
use tracing::debug;

/// Window bounds for the search, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSearch {
    max_window: usize,
    min_window: usize,
}

impl Default for WindowSearch {
    fn default() -> Self {
        Self {
            max_window: Self::DEFAULT_MAX_WINDOW,
            min_window: Self::DEFAULT_MIN_WINDOW,
        }
    }
}

impl WindowSearch {
    pub const DEFAULT_MAX_WINDOW: usize = 6;
    pub const DEFAULT_MIN_WINDOW: usize = 3;

    pub fn new(max_window: usize, min_window: usize) -> Result<Self, ConfigError> {
        if min_window == 0 {
            return Err(ConfigError::InvalidWindow(
                "min_window must be at least 1".to_string(),
            ));
        }
        if min_window > max_window {
            return Err(ConfigError::InvalidWindow(format!(
                "min_window {} exceeds max_window {}",
                min_window, max_window
            )));
        }
        Ok(Self {
            max_window,
            min_window,
        })
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    pub fn min_window(&self) -> usize {
        self.min_window
    }

    /// Normalize both inputs and search.
    pub fn search(&self, quote: &str, page_text: &str) -> AnchorResult {
        self.search_normalized(&normalize(quote), &normalize(page_text))
    }

    /// Search with inputs that are already normalized.
    pub fn search_normalized(&self, quote: &NormalizedText, page: &NormalizedText) -> AnchorResult {
        let words = quote.words();
        let n = words.len();
        let mut result = AnchorResult::new();

        for window in (self.min_window..=self.max_window).rev() {
            if !result.is_empty() {
                break;
            }
            if n < window {
                continue;
            }

            let mut i = 0;
            while i + window <= n {
                let chunk = words[i..i + window].join(" ");
                if page.contains(&chunk) {
                    debug!(window, position = i, chunk = %chunk, "window matched");
                    result.push(AnchorKeyword::new(chunk));
                    i += window;
                } else {
                    i += 1;
                }
            }
        }

        if result.is_empty() && n > 0 && n < self.min_window && page.contains(quote.as_str()) {
            debug!(quote = %quote, "short quote matched directly");
            result.push(AnchorKeyword::new(quote.as_str()));
        }

        result
    }
}

/// Resolve `quote` against one page's text with the default 6..=3 windows.
pub fn find_anchors(quote: &str, page_text: &str) -> AnchorResult {
    WindowSearch::default().search(quote, page_text)
}
