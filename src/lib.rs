//! citeanchor: Citation Anchor Resolver
//!
//! Locates the text a chat answer quoted on a PDF page, so a viewer can
//! jump to the page and highlight it. Quotes from a language model may be
//! re-typed, re-punctuated or truncated; only runs of words that occur
//! verbatim (after normalization) on the page are ever highlighted.
//!
//! # Core Concepts
//!
//! - **Normalization**: quotation marks stripped, whitespace collapsed, lowercased
//! - **Window search**: word windows from 6 down to 3, first matching size wins
//! - **Grouping**: citations clustered by document id or source for display
//! - **Resolution**: fetch page text, search, clear and re-apply highlights
//!
//! # Example
//!
//! ```
//! use citeanchor::find_anchors;
//!
//! let page = "Revenue grew by 12 percent in Q3 2023, driven by strong demand.";
//! let anchors = find_anchors("\u{201C}revenue grew by 12 percent\u{201D}", page);
//! assert_eq!(anchors.keywords(), vec!["revenue grew by 12 percent"]);
//! ```

pub mod anchor;
pub mod citation;
pub mod config;
pub mod resolver;

pub use anchor::{
    find_anchors, normalize, AnchorKeyword, AnchorResult, NormalizedText, WindowSearch,
};
pub use citation::{
    group_citations, ChatAnswer, Citation, CitationError, CitationGroup, UNKNOWN_SOURCE_KEY,
};
pub use config::{ConfigError, ResolverConfig};
pub use resolver::{
    AnchorResolver, ExtractionError, GenerationCounter, Highlighter, MemoryPages, Navigator,
    PageText, PageTextProvider, RecordingViewer, ResolutionStatus, ViewerCall,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
