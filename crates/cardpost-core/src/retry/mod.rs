//! Retry executor.
//!
//! This module encapsulates error classification (timeouts, throttling,
//! connection failures, HTTP status) and fixed-delay retry decisions so that
//! delivery and any other fallible operation share one consistent policy.

mod classify;
mod policy;
mod run;

pub use classify::{classify_curl_error, classify_http_status, Classify, ErrorKind, RetryOn};
pub use policy::{RetryDecision, RetryPolicy};
pub use run::{run_classified, run_with_retry};
