//! Mention tokens and the entities derived from them.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::user::User;

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<at>(.+?)</at>").expect("static mention pattern"))
}

/// Aliases referenced by `<at>…</at>` tokens in `text`, in order of appearance.
pub fn mention_aliases(text: &str) -> impl Iterator<Item = &str> {
    mention_re()
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
}

/// Wire entity telling the chat client which identity an `<at>alias</at>` token refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionEntity {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Literal `<at>alias</at>` token.
    #[serde(rename = "text")]
    pub alias_text: String,
    pub mentioned: Mentioned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mentioned {
    pub id: String,
    pub name: String,
}

impl MentionEntity {
    pub fn for_user(user: &User) -> Self {
        Self {
            kind: "mention",
            alias_text: format!("<at>{}</at>", user.alias),
            mentioned: Mentioned {
                id: user.id.clone(),
                name: user.display_name.clone(),
            },
        }
    }

    pub fn mentioned_id(&self) -> &str {
        &self.mentioned.id
    }

    pub fn mentioned_name(&self) -> &str {
        &self.mentioned.name
    }
}
