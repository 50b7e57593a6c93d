//! Text normalization shared by quotes and page text
//!
//! Both sides of a match go through the same lens: quotation marks
//! stripped, whitespace collapsed and trimmed, everything lowercased.

use serde::Serialize;
use std::fmt;

/// Text that has been through [`normalize`].
///
/// Never mutated after construction; words are separated by exactly one
/// ASCII space and there is no leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Words in order of appearance.
    pub fn words(&self) -> Vec<&str> {
        self.0.split(' ').filter(|w| !w.is_empty()).collect()
    }

    /// Contiguous substring test against already-normalized text.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Straight and curly quotation marks, plus the backtick PDFs and models
/// both use as an apostrophe stand-in.
pub fn is_quote_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '`' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}'
    )
}

/// Normalize text for verbatim comparison.
///
/// Total over any input; the empty string normalizes to the empty string.
/// Non-breaking spaces and other Unicode whitespace count as whitespace.
pub fn normalize(text: &str) -> NormalizedText {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().filter(|c| !is_quote_mark(*c)) {
        if c.is_whitespace() {
            // Leading whitespace never produces a separator
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }

    NormalizedText(out)
}
