//! Mentionable users.

/// A user that can be mentioned in a card via `<at>alias</at>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Key used inside `<at>…</at>` tokens.
    pub alias: String,
    /// Name shown in the rendered mention.
    pub display_name: String,
    /// Provider identity (e.g. UPN / email address).
    pub id: String,
}

impl User {
    /// `alias` defaults to `"{display_name} UPN"` when not supplied.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, alias: Option<&str>) -> Self {
        let display_name = display_name.into();
        let alias = match alias {
            Some(a) => a.to_string(),
            None => default_alias(&display_name),
        };
        Self {
            alias,
            display_name,
            id: id.into(),
        }
    }
}

pub fn default_alias(display_name: &str) -> String {
    format!("{} UPN", display_name)
}
