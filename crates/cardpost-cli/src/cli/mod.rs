//! CLI for cardpost.

mod commands;
mod parse;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cardpost_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_man, run_render, run_send, run_token};
pub use parse::{parse_header, parse_mention, MentionArg};

/// Top-level CLI for cardpost.
#[derive(Debug, Parser)]
#[command(name = "cardpost")]
#[command(about = "cardpost: send adaptive cards with mentions to a chat webhook", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Card content shared by `send` and `render`. The card file is applied first,
/// then `--mention` users, then `--text` blocks in order.
#[derive(Debug, Clone, Default, Args)]
pub struct CardArgs {
    /// TOML card file with [[mention]] and [[block]] tables.
    #[arg(long, value_name = "FILE")]
    pub card: Option<PathBuf>,

    /// Text block to append (repeatable). Use <at>ALIAS</at> to mention a user.
    #[arg(long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Mentionable user (repeatable). Alias defaults to "NAME UPN".
    #[arg(long = "mention", value_name = "ID:NAME[:ALIAS]", value_parser = parse_mention)]
    pub mentions: Vec<MentionArg>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a card and deliver it to the webhook, retrying transient failures.
    Send {
        #[command(flatten)]
        card: CardArgs,

        /// Webhook URL (defaults to `webhook_url` in the config file).
        #[arg(long, value_name = "URL")]
        webhook: Option<String>,

        /// Extra request header as "Name: value" (repeatable).
        #[arg(long = "header", value_name = "NAME: VALUE", value_parser = parse_header)]
        headers: Vec<(String, String)>,

        /// Override the configured attempt limit (0 = unlimited).
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,

        /// Override the configured pause between attempts.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Print the card JSON that `send` would post, without sending it.
    Render {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Acquire an access token with username/password.
    /// Reads CARDPOST_CLIENT_SECRET and CARDPOST_PASSWORD from the environment.
    Token {
        /// Application (client) id; defaults to `auth.client_id` in the config file.
        #[arg(long)]
        client_id: Option<String>,

        /// Directory (tenant) id; defaults to `auth.tenant_id` in the config file.
        #[arg(long)]
        tenant_id: Option<String>,

        /// Account to sign in as.
        #[arg(long)]
        username: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Send {
                card,
                webhook,
                headers,
                max_attempts,
                delay_ms,
            } => {
                run_send(&cfg, &card, webhook.as_deref(), headers, max_attempts, delay_ms).await?
            }
            CliCommand::Render { card } => run_render(&card)?,
            CliCommand::Token {
                client_id,
                tenant_id,
                username,
            } => run_token(&cfg, client_id, tenant_id, &username).await?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
