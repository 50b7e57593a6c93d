//! Citations returned by the chat backend
//!
//! Raw records are coerced into [`Citation`] at the boundary, so the rest
//! of the crate never sees loosely-typed fields.

mod answer;
mod group;
mod types;

pub use answer::ChatAnswer;
pub use group::{group_citations, CitationGroup, UNKNOWN_SOURCE_KEY};
pub use types::{Citation, CitationError};
