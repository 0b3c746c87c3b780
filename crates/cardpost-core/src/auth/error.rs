use thiserror::Error;

use crate::retry::{Classify, ErrorKind};
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Provider answered without an access token.
    #[error("{0}")]
    Authentication(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid token response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl Classify for AuthError {
    fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Authentication(_) => ErrorKind::Precondition,
            AuthError::Transport(e) => e.kind(),
            AuthError::InvalidResponse(_) => ErrorKind::Other,
        }
    }
}
