//! Wire messages for the scrape channel.
//!
//! Outbound: one JSON array of `{article, parse_from}` items per submit.
//! Inbound: per-article JSON objects with a `status` discriminator. Inbound
//! payloads are decoded exactly once, here at the channel boundary; nothing
//! duck-typed reaches the status store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SnkrError};

/// One entry of the outbound batch re-scrape request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequestItem {
    /// Article code identifying the shoe
    pub article: String,
    /// Source shop the scrape should run against
    pub parse_from: String,
}

/// Encodes a batch request into the single outbound message.
pub fn encode_request(items: &[ScrapeRequestItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// An inbound channel message, decoded into its recognized shape.
///
/// The server streams one message per processed article. Messages that parse
/// as JSON but do not match a known shape become `Unknown` so the session
/// can log and drop them in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// A scrape finished; `data` is the re-serialized shoe
    Success { article: String, data: Value },
    /// A scrape failed. `article` is absent when the server rejected the
    /// whole batch before processing any item.
    Error {
        article: Option<String>,
        error: String,
    },
    /// Parsed as JSON but not a recognized message shape
    Unknown,
}

#[derive(Deserialize)]
struct RawInbound {
    #[serde(default)]
    article: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl InboundMessage {
    /// Decodes a raw text frame.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error if the frame is not valid JSON. JSON that
    /// does not match a known shape decodes to `Unknown` instead - the two
    /// cases are logged differently by the session but both are dropped.
    pub fn decode(raw: &str) -> Result<Self> {
        let raw: RawInbound = serde_json::from_str(raw)
            .map_err(|e| SnkrError::parse(format!("invalid channel message: {e}")))?;

        match raw.status.as_deref() {
            Some("success") => match raw.article {
                Some(article) => Ok(Self::Success {
                    article,
                    data: raw.data.unwrap_or(Value::Null),
                }),
                None => Ok(Self::Unknown),
            },
            Some("error") => Ok(Self::Error {
                article: raw.article,
                error: raw
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }),
            _ => Ok(Self::Unknown),
        }
    }
}
