//! Citation anchoring
//!
//! Turns a model-quoted excerpt into verbatim substrings of a page's
//! extracted text. Pure and synchronous: no collaborator is touched here.

mod normalize;
mod search;
mod types;

pub use normalize::{is_quote_mark, normalize, NormalizedText};
pub use search::{find_anchors, WindowSearch};
pub use types::{AnchorKeyword, AnchorResult};
