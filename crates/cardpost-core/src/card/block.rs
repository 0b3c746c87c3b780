//! Text blocks: newline expansion and caller-supplied style keys.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Replacement for each `\n` so that line breaks survive adaptive-card markdown.
pub const NEWLINE_SPACER: &str = "\n\n\n\n \n\n\n\n";

/// Keys owned by the block itself; style maps cannot override them.
const RESERVED_KEYS: [&str; 2] = ["type", "text"];

/// One display unit of text plus optional style keys (size, color, weight, ...).
///
/// Style keys are passed through verbatim; see
/// <https://adaptivecards.io/explorer/TextBlock.html> for what clients accept.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    text: String,
    style: Map<String, Value>,
}

impl TextBlock {
    /// Builds a block, expanding newlines in `text`.
    pub fn new(text: &str, style: Map<String, Value>) -> Self {
        let mut kept = Map::new();
        for (key, value) in style {
            if RESERVED_KEYS.contains(&key.as_str()) {
                tracing::warn!(key = %key, "ignoring reserved text block style key");
                continue;
            }
            kept.insert(key, value);
        }
        Self {
            text: expand_newlines(text),
            style: kept,
        }
    }

    /// Stored (already expanded) text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Map<String, Value> {
        &self.style
    }
}

pub fn expand_newlines(text: &str) -> String {
    text.replace('\n', NEWLINE_SPACER)
}

impl Serialize for TextBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.style.len()))?;
        map.serialize_entry("type", "TextBlock")?;
        map.serialize_entry("text", &self.text)?;
        for (k, v) in &self.style {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
