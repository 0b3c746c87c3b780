//! Serde shapes of the webhook payload (message with one adaptive-card attachment).

use serde::Serialize;

use super::block::TextBlock;
use super::mention::MentionEntity;

pub const MESSAGE_TYPE: &str = "message";
pub const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const CARD_TYPE: &str = "AdaptiveCard";
pub const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const CARD_VERSION: &str = "1.2";
pub const CARD_WIDTH: &str = "full";

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attachments: [Attachment<'a>; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment<'a> {
    pub content_type: &'static str,
    pub content: AdaptiveCard<'a>,
}

#[derive(Debug, Serialize)]
pub struct AdaptiveCard<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub version: &'static str,
    pub body: &'a [TextBlock],
    pub msteams: MsTeams<'a>,
}

#[derive(Debug, Serialize)]
pub struct MsTeams<'a> {
    pub width: &'static str,
    pub entities: &'a [MentionEntity],
}

impl<'a> Message<'a> {
    pub fn new(body: &'a [TextBlock], entities: &'a [MentionEntity]) -> Self {
        Self {
            kind: MESSAGE_TYPE,
            attachments: [Attachment {
                content_type: CARD_CONTENT_TYPE,
                content: AdaptiveCard {
                    kind: CARD_TYPE,
                    schema: CARD_SCHEMA,
                    version: CARD_VERSION,
                    body,
                    msteams: MsTeams {
                        width: CARD_WIDTH,
                        entities,
                    },
                },
            }],
        }
    }
}
