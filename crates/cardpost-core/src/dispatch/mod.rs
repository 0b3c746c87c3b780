//! Webhook delivery: construct → validate → serialize → POST, under a retry policy.

mod error;

pub use error::DispatchError;

use std::collections::HashMap;

use crate::card::CardDocument;
use crate::config::RetryConfig;
use crate::retry::{run_classified, RetryOn, RetryPolicy};
use crate::transport::{HttpResponse, Transport};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Sends cards to a webhook through `T`, retrying transient failures.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
    policy: RetryPolicy,
    retry_on: RetryOn,
}

impl<T: Transport> Dispatcher<T> {
    /// Default delivery policy: 5 attempts, 5000 ms apart, retrying transport
    /// failures and any non-2xx status.
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, RetryPolicy::default(), RetryOn::transient())
    }

    pub fn with_policy(transport: T, policy: RetryPolicy, retry_on: RetryOn) -> Self {
        Self {
            transport,
            policy,
            retry_on,
        }
    }

    pub fn from_config(transport: T, cfg: &RetryConfig) -> Self {
        Self::with_policy(transport, cfg.policy(), cfg.retry_on())
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Delivers `card` to `url`. Each attempt rebuilds mention entities from the
    /// current blocks. Card precondition failures return on the first attempt;
    /// after exhaustion the last delivery error is returned unchanged.
    pub fn send(
        &self,
        card: &mut CardDocument,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, DispatchError> {
        let headers = request_headers(headers);
        let resp = run_classified(&self.policy, "send_card", &self.retry_on, || {
            self.attempt(card, url, &headers)
        })?;
        tracing::info!(
            status = resp.status,
            blocks = card.blocks().len(),
            mentions = card.entities().len(),
            "card delivered"
        );
        Ok(resp)
    }

    fn attempt(
        &self,
        card: &mut CardDocument,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, DispatchError> {
        card.construct()?;
        card.validate()?;
        let payload = card.serialize()?;
        let resp = self.transport.post(url, headers, payload.as_bytes())?;
        if !resp.is_success() {
            return Err(DispatchError::HttpStatus {
                status: resp.status,
                body: resp.body_text(),
            });
        }
        Ok(resp)
    }
}

/// JSON content type plus caller headers; caller values win on conflict.
fn request_headers(extra: &HashMap<String, String>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    let overrides_content_type = extra
        .keys()
        .any(|k| k.trim().eq_ignore_ascii_case("content-type"));
    if !overrides_content_type {
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
    }
    headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    headers
}
