//! Value parsers for repeatable CLI arguments.

/// A `--mention ID:NAME[:ALIAS]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionArg {
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
}

pub fn parse_mention(s: &str) -> Result<MentionArg, String> {
    let mut parts = s.splitn(3, ':').map(str::trim);
    let id = parts.next().unwrap_or("");
    let name = parts.next().unwrap_or("");
    if id.is_empty() || name.is_empty() {
        return Err(format!("expected ID:NAME[:ALIAS], got {:?}", s));
    }
    let alias = match parts.next() {
        Some("") => return Err("alias after the second ':' must not be empty".to_string()),
        Some(a) => Some(a.to_string()),
        None => None,
    };
    Ok(MentionArg {
        id: id.to_string(),
        name: name.to_string(),
        alias,
    })
}

pub fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("header name must not be empty".to_string());
    }
    Ok((name.to_string(), value.trim().to_string()))
}
