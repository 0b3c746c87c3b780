//! Card precondition errors.

use thiserror::Error;

use crate::retry::{Classify, ErrorKind};

/// Failure to turn the current card contents into a sendable document.
/// Both variants are precondition failures and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card has no text blocks.
    #[error("no text block has been added")]
    EmptyBody,
    /// A `<at>alias</at>` token references an alias with no registered user.
    #[error("can't find user with alias \"{alias}\"")]
    UnknownAlias { alias: String },
}

impl Classify for CardError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Precondition
    }
}
