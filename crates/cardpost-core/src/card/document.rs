//! The card aggregate: ordered text blocks, a roster of mentionable users, and
//! the mention entities derived from the blocks.

use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::block::TextBlock;
use super::error::CardError;
use super::mention::{mention_aliases, MentionEntity};
use super::user::User;
use super::wire::Message;

/// An adaptive card under construction.
///
/// Not synchronized: callers sharing one document must serialize access to it.
#[derive(Debug, Clone, Default)]
pub struct CardDocument {
    blocks: Vec<TextBlock>,
    users: HashMap<String, User>,
    entities: Vec<MentionEntity>,
}

impl CardDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mentionable user. A later registration for the same alias
    /// replaces the earlier one. Returns the alias under which it was stored.
    pub fn add_user(&mut self, id: &str, display_name: &str, alias: Option<&str>) -> String {
        let user = User::new(id, display_name, alias);
        let alias = user.alias.clone();
        if let Some(prev) = self.users.insert(alias.clone(), user) {
            tracing::debug!(alias = %alias, previous_id = %prev.id, "replaced mention user");
        }
        alias
    }

    /// Adds a text block at `position` (shifting later blocks right) or appends
    /// when `position` is `None`. Positions past the end append.
    pub fn add_text_block(&mut self, text: &str, position: Option<usize>, style: Map<String, Value>) {
        let block = TextBlock::new(text, style);
        match position {
            Some(p) if p < self.blocks.len() => self.blocks.insert(p, block),
            _ => self.blocks.push(block),
        }
    }

    /// Recomputes mention entities from the current blocks.
    ///
    /// Each alias referenced anywhere in the body yields exactly one entity, in
    /// first-appearance order across blocks. An unknown alias fails the whole
    /// pass and leaves the entity list empty.
    pub fn construct(&mut self) -> Result<(), CardError> {
        self.entities.clear();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entities = Vec::new();
        for block in &self.blocks {
            for alias in mention_aliases(block.text()) {
                let user = self.users.get(alias).ok_or_else(|| CardError::UnknownAlias {
                    alias: alias.to_string(),
                })?;
                if seen.insert(alias) {
                    entities.push(MentionEntity::for_user(user));
                }
            }
        }
        self.entities = entities;
        Ok(())
    }

    /// Fails when there is nothing to send.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.blocks.is_empty() {
            return Err(CardError::EmptyBody);
        }
        Ok(())
    }

    /// Wire view of the current blocks and entities.
    pub fn message(&self) -> Message<'_> {
        Message::new(&self.blocks, &self.entities)
    }

    /// Compact JSON wire payload.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.message())
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.message())
    }

    /// Pretty-printed payload for logs and dry runs.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.message()).unwrap_or_else(|e| format!("<unrenderable card: {}>", e))
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn entities(&self) -> &[MentionEntity] {
        &self.entities
    }

    pub fn user(&self, alias: &str) -> Option<&User> {
        self.users.get(alias)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl fmt::Display for CardDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.serialize().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
