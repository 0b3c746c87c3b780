//! Build a card from `--card`, `--mention` and `--text`.

use anyhow::Result;
use cardpost_core::card::CardSpec;
use cardpost_core::CardDocument;
use serde_json::Map;

use crate::cli::CardArgs;

pub fn build_card(args: &CardArgs) -> Result<CardDocument> {
    let mut card = match &args.card {
        Some(path) => CardSpec::load(path)?.into_document(),
        None => CardDocument::new(),
    };
    for m in &args.mentions {
        card.add_user(&m.id, &m.name, m.alias.as_deref());
    }
    for text in &args.texts {
        card.add_text_block(text, None, Map::new());
    }
    Ok(card)
}
