//! Classify HTTP status and curl errors into retry error kinds.

use serde::{Deserialize, Serialize};

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, etc.).
    Connection,
    /// Any other transport-layer failure.
    Transport,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Other 5xx status.
    Http5xx,
    /// Any other non-2xx status.
    HttpStatus,
    /// Caller-side precondition (empty card, unknown mention alias, missing token).
    /// Never retryable.
    Precondition,
    /// Anything else (serialization bugs, malformed responses).
    Other,
}

/// Errors that can be classified at the retry boundary.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

/// Closed set of error kinds that a retry executor should retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryOn {
    kinds: Vec<ErrorKind>,
}

impl RetryOn {
    /// Build a set from the given kinds. `Precondition` is dropped: precondition
    /// failures always propagate on first occurrence.
    pub fn new(kinds: impl IntoIterator<Item = ErrorKind>) -> Self {
        let mut set = Vec::new();
        for kind in kinds {
            if kind == ErrorKind::Precondition {
                tracing::warn!("ignoring precondition in retryable error set");
                continue;
            }
            if !set.contains(&kind) {
                set.push(kind);
            }
        }
        Self { kinds: set }
    }

    /// Transport failures and any non-2xx HTTP status.
    pub fn transient() -> Self {
        Self::new([
            ErrorKind::Timeout,
            ErrorKind::Connection,
            ErrorKind::Transport,
            ErrorKind::Throttled,
            ErrorKind::Http5xx,
            ErrorKind::HttpStatus,
        ])
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// True when the error's kind is in the set.
    pub fn matches<E: Classify>(&self, err: &E) -> bool {
        self.contains(err.kind())
    }

    pub fn kinds(&self) -> &[ErrorKind] {
        &self.kinds
    }
}

impl Default for RetryOn {
    fn default() -> Self {
        Self::transient()
    }
}

/// Classify a non-2xx HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx,
        _ => ErrorKind::HttpStatus,
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Transport
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_429_and_503_throttled() {
        assert_eq!(classify_http_status(429), ErrorKind::Throttled);
        assert_eq!(classify_http_status(503), ErrorKind::Throttled);
    }

    #[test]
    fn http_5xx() {
        assert_eq!(classify_http_status(500), ErrorKind::Http5xx);
        assert_eq!(classify_http_status(502), ErrorKind::Http5xx);
    }

    #[test]
    fn http_4xx_is_plain_status() {
        assert_eq!(classify_http_status(404), ErrorKind::HttpStatus);
        assert_eq!(classify_http_status(400), ErrorKind::HttpStatus);
    }

    #[test]
    fn curl_couldnt_connect_is_connection() {
        // CURLE_COULDNT_CONNECT
        let e = curl::Error::new(7);
        assert_eq!(classify_curl_error(&e), ErrorKind::Connection);
        // CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), ErrorKind::Timeout);
        // CURLE_URL_MALFORMAT
        let e = curl::Error::new(3);
        assert_eq!(classify_curl_error(&e), ErrorKind::Transport);
    }

    #[test]
    fn precondition_never_enters_set() {
        let set = RetryOn::new([ErrorKind::Precondition, ErrorKind::Connection]);
        assert!(!set.contains(ErrorKind::Precondition));
        assert!(set.contains(ErrorKind::Connection));
        assert_eq!(set.kinds(), &[ErrorKind::Connection]);
    }

    #[test]
    fn transient_set_covers_transport_and_status() {
        let set = RetryOn::transient();
        for kind in [
            ErrorKind::Timeout,
            ErrorKind::Connection,
            ErrorKind::Transport,
            ErrorKind::Throttled,
            ErrorKind::Http5xx,
            ErrorKind::HttpStatus,
        ] {
            assert!(set.contains(kind), "{kind:?} should be retryable");
        }
        assert!(!set.contains(ErrorKind::Precondition));
        assert!(!set.contains(ErrorKind::Other));
    }

    #[test]
    fn kinds_deserialize_snake_case() {
        #[derive(Deserialize)]
        struct Wrap {
            kinds: Vec<ErrorKind>,
        }
        let w: Wrap = toml::from_str(r#"kinds = ["http5xx", "http_status", "connection"]"#).unwrap();
        assert_eq!(
            w.kinds,
            vec![ErrorKind::Http5xx, ErrorKind::HttpStatus, ErrorKind::Connection]
        );
    }
}
