//! Adaptive card construction and mention resolution.
//!
//! A [`CardDocument`] holds ordered text blocks and a roster of users. Each
//! `construct` pass rescans the blocks for `<at>alias</at>` tokens and rebuilds
//! the mention entities from scratch, so re-running it before every delivery
//! attempt is safe.

mod block;
mod document;
mod error;
mod mention;
mod spec;
mod user;
pub mod wire;

pub use block::{expand_newlines, TextBlock, NEWLINE_SPACER};
pub use document::CardDocument;
pub use error::CardError;
pub use mention::{mention_aliases, MentionEntity, Mentioned};
pub use spec::{BlockSpec, CardSpec, MentionSpec};
pub use user::{default_alias, User};
