//! HTTP transport used for webhook delivery and token requests.
//!
//! Only failures to complete the exchange are errors here; status codes are
//! returned to the caller to interpret.

mod curl;

pub use self::curl::CurlTransport;

use std::collections::HashMap;
use thiserror::Error;

use crate::retry::{classify_curl_error, Classify, ErrorKind};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossy for non-UTF-8 bytes.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] ::curl::Error),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl Classify for TransportError {
    fn kind(&self) -> ErrorKind {
        match self {
            TransportError::Curl(e) => classify_curl_error(e),
            TransportError::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => ErrorKind::Timeout,
            TransportError::Io(_) => ErrorKind::Connection,
        }
    }
}

/// Blocking request/response client.
pub trait Transport {
    /// POSTs `body` to `url` with the given headers and waits for the response.
    fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, headers, body)
    }
}
