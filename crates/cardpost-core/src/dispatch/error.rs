//! Delivery error taxonomy.

use thiserror::Error;

use crate::card::CardError;
use crate::retry::{classify_http_status, Classify, ErrorKind};
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Card could not be built (empty body, unknown alias). Never retried.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Webhook answered with a non-2xx status.
    #[error("webhook returned HTTP {status}: {body}")]
    HttpStatus { status: u32, body: String },
    #[error("serialize card: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Classify for DispatchError {
    fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::Card(e) => e.kind(),
            DispatchError::Transport(e) => e.kind(),
            DispatchError::HttpStatus { status, .. } => classify_http_status(*status),
            DispatchError::Serialize(_) => ErrorKind::Other,
        }
    }
}

impl DispatchError {
    /// HTTP status for status failures.
    pub fn status(&self) -> Option<u32> {
        match self {
            DispatchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
