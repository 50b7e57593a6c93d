//! Chat answer envelope: `{ "answer": ..., "citations": [...] }`

use super::types::{Citation, CitationError};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// An answer from the chat backend with its coerced citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub citations: Vec<Citation>,
}

impl ChatAnswer {
    /// Parse a backend reply, keeping at most `max_citations` citations.
    ///
    /// Citation records that cannot be coerced are skipped, not fatal.
    pub fn from_json(body: &str, max_citations: usize) -> Result<Self, CitationError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value, max_citations)
    }

    pub fn from_value(value: &Value, max_citations: usize) -> Result<Self, CitationError> {
        let answer = value
            .get("answer")
            .and_then(Value::as_str)
            .ok_or(CitationError::MissingField("answer"))?
            .to_string();

        let records = value
            .get("citations")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let citations = records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| match Citation::from_value(record) {
                Ok(citation) => Some(citation),
                Err(e) => {
                    warn!(index = i, error = %e, "skipping malformed citation");
                    None
                }
            })
            .take(max_citations)
            .collect();

        Ok(Self { answer, citations })
    }
}
