//! Citation record and boundary coercion

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors from turning backend payloads into citations.
#[derive(Debug, Error)]
pub enum CitationError {
    #[error("citation record is not a JSON object")]
    NotAnObject,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A quoted excerpt plus a 1-based page reference.
///
/// Every field is optional because the backend does not guarantee any of
/// them; a citation without a page cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Citation {
    pub fn new(content: impl Into<String>, page: u32) -> Self {
        Self {
            content: Some(content.into()),
            page: Some(page),
            document_id: None,
            source: None,
        }
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Coerce a raw backend record.
    ///
    /// `page` may be an integer or a numeric string; anything that is not a
    /// positive integer is dropped. Numeric document ids become strings.
    /// Fields of any other type are dropped rather than failing the record.
    pub fn from_value(value: &Value) -> Result<Self, CitationError> {
        let record = value.as_object().ok_or(CitationError::NotAnObject)?;

        Ok(Self {
            content: record.get("content").and_then(text_field),
            page: record.get("page").and_then(coerce_page),
            document_id: record.get("document_id").and_then(identifier_field),
            source: record.get("source").and_then(text_field),
        })
    }

    /// The page if it is a usable 1-based number.
    pub fn valid_page(&self) -> Option<u32> {
        self.page.filter(|&p| p >= 1)
    }

    /// Zero-based page index for the viewer.
    pub fn zero_based_page(&self) -> Option<usize> {
        self.valid_page().map(|p| (p - 1) as usize)
    }

    /// Label shown on the citation card.
    pub fn page_label(&self) -> String {
        match self.valid_page() {
            Some(page) => format!("Page {}", page),
            None => "Page ?".to_string(),
        }
    }

    /// Group key: a non-empty document id, else the source, else `None`.
    pub fn grouping_key(&self) -> Option<&str> {
        match self.document_id.as_deref() {
            Some(id) if !id.is_empty() => Some(id),
            _ => self.source.as_deref(),
        }
    }
}

fn text_field(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn identifier_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Routes derived deserialization through the same page coercion.
fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_page(&value))
}

fn coerce_page(value: &Value) -> Option<u32> {
    let page = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match page {
        Some(p) if p >= 1 => u32::try_from(p).ok(),
        _ => {
            if !value.is_null() {
                debug!(page = %value, "dropping unusable citation page");
            }
            None
        }
    }
}
