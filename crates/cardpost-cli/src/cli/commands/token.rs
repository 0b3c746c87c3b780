//! `cardpost token` – acquire an access token with username/password.

use anyhow::{Context, Result};
use cardpost_core::auth::{self, TokenRequest};
use cardpost_core::config::CardpostConfig;
use cardpost_core::CurlTransport;

pub const CLIENT_SECRET_ENV: &str = "CARDPOST_CLIENT_SECRET";
pub const PASSWORD_ENV: &str = "CARDPOST_PASSWORD";

pub async fn run_token(
    cfg: &CardpostConfig,
    client_id: Option<String>,
    tenant_id: Option<String>,
    username: &str,
) -> Result<()> {
    let auth_cfg = cfg.auth_or_default();
    let client_id = client_id
        .or(auth_cfg.client_id)
        .context("no client id: pass --client-id or set auth.client_id")?;
    let tenant_id = tenant_id
        .or(auth_cfg.tenant_id)
        .context("no tenant id: pass --tenant-id or set auth.tenant_id")?;
    let client_secret =
        std::env::var(CLIENT_SECRET_ENV).with_context(|| format!("{} is not set", CLIENT_SECRET_ENV))?;
    let password = std::env::var(PASSWORD_ENV).with_context(|| format!("{} is not set", PASSWORD_ENV))?;
    let username = username.to_string();
    let authority_base = auth_cfg.authority_base;
    let transport = CurlTransport::from(&cfg.http_or_default());

    let token = tokio::task::spawn_blocking(move || {
        let req = TokenRequest {
            client_id: &client_id,
            client_secret: &client_secret,
            tenant_id: &tenant_id,
            username: &username,
            password: &password,
        };
        auth::acquire_access_token(&transport, &authority_base, &req)
    })
    .await
    .context("token task join")??;

    println!("{}", token);
    Ok(())
}
