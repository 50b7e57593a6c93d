//! Anchor resolution against a live document viewer
//!
//! The resolver fetches page text through a [`PageTextProvider`], runs the
//! window search, and drives a [`Highlighter`] and [`Navigator`]. Failures
//! never reach the caller; they end as "no highlight" and are logged.

mod generation;
mod memory;
mod orchestrator;
mod status;
mod traits;

pub use generation::GenerationCounter;
pub use memory::{MemoryPages, RecordingViewer, ViewerCall};
pub use orchestrator::AnchorResolver;
pub use status::ResolutionStatus;
pub use traits::{ExtractionError, Highlighter, Navigator, PageText, PageTextProvider};
