//! Declarative card files (TOML): mentions and text blocks applied in file order.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::document::CardDocument;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardSpec {
    #[serde(default, rename = "mention")]
    pub mentions: Vec<MentionSpec>,
    #[serde(default, rename = "block")]
    pub blocks: Vec<BlockSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MentionSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockSpec {
    pub text: String,
    #[serde(default)]
    pub position: Option<usize>,
    #[serde(default)]
    pub style: Map<String, Value>,
}

impl CardSpec {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse card file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&data).with_context(|| format!("in {}", path.display()))
    }

    /// Applies mentions then blocks to `doc`.
    pub fn apply_to(self, doc: &mut CardDocument) {
        for m in self.mentions {
            doc.add_user(&m.id, &m.name, m.alias.as_deref());
        }
        for b in self.blocks {
            doc.add_text_block(&b.text, b.position, b.style);
        }
    }

    pub fn into_document(self) -> CardDocument {
        let mut doc = CardDocument::new();
        self.apply_to(&mut doc);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [[mention]]
        id = "alice@example.com"
        name = "Alice"
        alias = "alice"

        [[mention]]
        id = "bob@example.com"
        name = "Bob"

        [[block]]
        text = "second"

        [[block]]
        text = "Deploy done, <at>alice</at> and <at>Bob UPN</at>"
        position = 0
        style = { size = "large", weight = "bolder" }
    "#;

    #[test]
    fn parses_mentions_and_blocks() {
        let spec = CardSpec::from_toml_str(SAMPLE).unwrap();
        assert_eq!(spec.mentions.len(), 2);
        assert_eq!(spec.mentions[1].alias, None);
        assert_eq!(spec.blocks.len(), 2);
        assert_eq!(spec.blocks[1].position, Some(0));
        assert_eq!(spec.blocks[1].style["size"], "large");
    }

    #[test]
    fn into_document_applies_positions_and_default_alias() {
        let mut doc = CardSpec::from_toml_str(SAMPLE).unwrap().into_document();
        assert_eq!(doc.blocks().len(), 2);
        assert!(doc.blocks()[0].text().starts_with("Deploy done"));
        assert_eq!(doc.blocks()[1].text(), "second");
        assert!(doc.user("Bob UPN").is_some());
        doc.construct().unwrap();
        let names: Vec<&str> = doc.entities().iter().map(|e| e.mentioned_name()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn empty_file_is_empty_card() {
        let doc = CardSpec::from_toml_str("").unwrap().into_document();
        assert!(doc.blocks().is_empty());
        assert!(doc.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        f.flush().unwrap();
        let spec = CardSpec::load(f.path()).unwrap();
        assert_eq!(spec.blocks.len(), 2);
    }

    #[test]
    fn block_without_text_rejected() {
        let err = CardSpec::from_toml_str("[[block]]\nposition = 1\n").unwrap_err();
        assert!(format!("{:#}", err).contains("text"));
    }
}
