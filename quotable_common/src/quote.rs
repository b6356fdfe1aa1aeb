//! Quote model and decoding of the remote payload.
//!
//! The quote service answers with a JSON array of objects shaped like
//! `{ "q": text, "a": author, "_id": id }`; only the first element is used.
//! Decoding is kept free of any HTTP concerns so it can be exercised on plain bytes.
use serde::Deserialize;
use serde_json::Value;

use crate::error::QuoteError;
use crate::result::Result;

/// A quote as kept in the list. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quote body.
    pub text: String,
    /// Author, when the service provided a non-blank one.
    pub author: Option<String>,
    /// Identifier assigned by the service, if any.
    pub source_id: Option<String>,
}

impl Quote {
    /// Creates a quote from its parts.
    pub fn new(text: impl Into<String>, author: Option<String>, source_id: Option<String>) -> Self {
        Quote {
            text: text.into(),
            author,
            source_id,
        }
    }

    /// Display key for the quote sitting at `index`: the service id when present,
    /// otherwise the position.
    pub fn key(&self, index: usize) -> String {
        match &self.source_id {
            Some(id) => id.clone(),
            None => index.to_string(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.text)?;
        if let Some(author) = &self.author {
            write!(f, " \u{2014} {}", author)?;
        }
        Ok(())
    }
}

/// One element of the service response.
#[derive(Debug, Deserialize)]
struct WireQuote {
    q: String,
    a: Option<String>,
    #[serde(rename = "_id")]
    id: Option<String>,
}

impl From<WireQuote> for Quote {
    fn from(wire: WireQuote) -> Self {
        let author = wire.a.filter(|a| !a.trim().is_empty());
        Quote {
            text: wire.q,
            author,
            source_id: wire.id,
        }
    }
}

/// Decodes a response body and maps its first element to a [`Quote`].
///
/// Fails with [`QuoteError::MalformedResponse`] when the body is not JSON, is not an
/// array, is an empty array, or its first element has no `q` string.
pub fn decode_first(body: &[u8]) -> Result<Quote> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| QuoteError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(QuoteError::MalformedResponse(format!(
                "expected a JSON array, got {}",
                kind_of(&other)
            )));
        }
    };

    let first = items
        .into_iter()
        .next()
        .ok_or_else(|| QuoteError::MalformedResponse("empty array".to_string()))?;

    let wire: WireQuote = serde_json::from_value(first)
        .map_err(|e| QuoteError::MalformedResponse(format!("unexpected quote shape: {}", e)))?;

    Ok(wire.into())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
