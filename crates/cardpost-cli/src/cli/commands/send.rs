//! `cardpost send` – deliver a card to the webhook.

use anyhow::{Context, Result};
use cardpost_core::config::CardpostConfig;
use cardpost_core::{CurlTransport, Dispatcher};
use std::collections::HashMap;

use super::build_card;
use crate::cli::CardArgs;

pub async fn run_send(
    cfg: &CardpostConfig,
    args: &CardArgs,
    webhook: Option<&str>,
    headers: Vec<(String, String)>,
    max_attempts: Option<u32>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let url = webhook
        .map(str::to_string)
        .or_else(|| cfg.webhook_url.clone())
        .context("no webhook URL: pass --webhook or set webhook_url in the config file")?;

    let mut retry = cfg.retry_or_default();
    if let Some(n) = max_attempts {
        retry.max_attempts = n;
    }
    if let Some(ms) = delay_ms {
        retry.delay_ms = ms;
    }

    let mut card = build_card(args)?;
    let transport = CurlTransport::from(&cfg.http_or_default());
    let headers: HashMap<String, String> = headers.into_iter().collect();

    let (resp, blocks, mentions) = tokio::task::spawn_blocking(move || {
        let dispatcher = Dispatcher::from_config(transport, &retry);
        let resp = dispatcher.send(&mut card, &url, &headers)?;
        Ok::<_, cardpost_core::DispatchError>((resp, card.blocks().len(), card.entities().len()))
    })
    .await
    .context("send task join")??;

    println!(
        "Delivered card ({} block(s), {} mention(s)): HTTP {}",
        blocks, mentions, resp.status
    );
    Ok(())
}
