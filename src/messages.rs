//! Localized message catalog.
//!
//! Catalogs travel as base64-encoded JSON objects mapping message keys to
//! strings, the raw form the upstream translation repository serves. The
//! catalog is layered: the default language loads first, then the page's
//! content language overlays it, so partially translated languages fall back
//! key by key.

use std::collections::HashMap;

use anyhow::{Context, Result};
use base64::Engine;
use tracing::trace;

/// Bookkeeping entry present in every translation file; not a message.
const METADATA_KEY: &str = "@metadata";

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw catalog payload and merge its messages, overwriting
    /// existing keys. Non-string values other than the metadata entry are
    /// skipped.
    pub fn load(&mut self, payload: &str) -> Result<()> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .context("decoding catalog payload")?;
        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_slice(&decoded).context("parsing catalog JSON")?;

        for (key, value) in parsed {
            if key == METADATA_KEY {
                continue;
            }
            match value {
                serde_json::Value::String(text) => {
                    self.entries.insert(key, text);
                }
                other => trace!(key, ?other, "skipping non-string catalog entry"),
            }
        }
        Ok(())
    }

    /// Look up a message, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a message, falling back to the key itself so missing
    /// translations stay visible instead of producing empty UI strings.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn encode_catalog(entries: &[(&str, &str)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), serde_json::Value::String((*v).to_string())))
        .collect();
    base64::engine::general_purpose::STANDARD
        .encode(serde_json::to_vec(&map).expect("catalog serializes"))
}
