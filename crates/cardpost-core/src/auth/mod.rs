//! Access-token acquisition via the resource-owner password grant.
//!
//! A single stateless exchange against `{authority_base}/{tenant_id}`; not
//! retried. The provider's JSON answer is interpreted regardless of status so
//! that its `error_description` reaches the caller.

mod error;

pub use error::AuthError;

use serde_json::Value;
use std::collections::HashMap;

use crate::transport::Transport;

pub const DEFAULT_AUTHORITY_BASE: &str = "https://login.microsoftonline.com";
/// Mail-protocol (IMAP) access scope requested for every token.
pub const IMAP_SCOPE: &str = "https://outlook.office.com/IMAP.AccessAsUser.All";
pub const MISSING_TOKEN_MESSAGE: &str = "access token can't be found in the provider response";

/// Credentials for one token exchange.
#[derive(Clone)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub tenant_id: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for TokenRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("client_id", &self.client_id)
            .field("tenant_id", &self.tenant_id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// `{authority_base}/{tenant_id}`.
pub fn authority(authority_base: &str, tenant_id: &str) -> String {
    format!("{}/{}", authority_base.trim_end_matches('/'), tenant_id)
}

pub fn token_endpoint(authority_base: &str, tenant_id: &str) -> String {
    format!("{}/oauth2/v2.0/token", authority(authority_base, tenant_id))
}

/// Form body for the password grant.
pub fn token_form(req: &TokenRequest<'_>) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", req.client_id)
        .append_pair("client_secret", req.client_secret)
        .append_pair("grant_type", "password")
        .append_pair("username", req.username)
        .append_pair("password", req.password)
        .append_pair("scope", IMAP_SCOPE)
        .finish()
}

/// Exchanges username/password for an access token.
pub fn acquire_access_token<T: Transport>(
    transport: &T,
    authority_base: &str,
    req: &TokenRequest<'_>,
) -> Result<String, AuthError> {
    let url = token_endpoint(authority_base, req.tenant_id);
    let mut headers = HashMap::new();
    headers.insert(
        "Content-Type".to_string(),
        "application/x-www-form-urlencoded".to_string(),
    );
    let resp = transport.post(&url, &headers, token_form(req).as_bytes())?;
    tracing::debug!(status = resp.status, tenant = req.tenant_id, "token endpoint answered");
    let payload: Value = serde_json::from_slice(&resp.body)?;
    token_from_response(&payload)
}

/// Extracts `access_token`, or fails with the provider's description.
pub fn token_from_response(payload: &Value) -> Result<String, AuthError> {
    if let Some(token) = payload.get("access_token").and_then(Value::as_str) {
        return Ok(token.to_string());
    }
    let message = payload
        .get("error_description")
        .and_then(Value::as_str)
        .unwrap_or(MISSING_TOKEN_MESSAGE);
    Err(AuthError::Authentication(message.to_string()))
}
