// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Discord interaction payloads (inbound) and responses (outbound).
//!
//! Only the fields the bot reads are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// Message flag that hides a reply from everyone but the invoking user.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

/// Interaction kind, from the payload's numeric `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    ModalSubmit,
    Other(u8),
}

impl From<u8> for InteractionKind {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionKind::Ping,
            2 => InteractionKind::ApplicationCommand,
            5 => InteractionKind::ModalSubmit,
            other => InteractionKind::Other(other),
        }
    }
}

/// Inbound interaction envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    /// Present for interactions inside a guild
    #[serde(default)]
    pub member: Option<Member>,
    /// Present for interactions in DMs
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Command name and options, or modal ID and submitted values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOptionValue>,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub components: Vec<ActionRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOptionValue {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionRow {
    #[serde(default)]
    pub components: Vec<SubmittedInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedInput {
    pub custom_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        InteractionKind::from(self.kind)
    }

    /// ID of the user who triggered the interaction.
    pub fn user_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| &m.user)
            .or(self.user.as_ref())
            .map(|u| u.id.as_str())
    }

    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref()?.name.as_deref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.data.as_ref()?.custom_id.as_deref()
    }

    /// Integer option of a slash command, if supplied.
    pub fn integer_option(&self, name: &str) -> Option<i64> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_i64())
    }

    /// Value of a text input in a submitted modal.
    pub fn text_input(&self, custom_id: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .find(|c| c.custom_id == custom_id)
            .and_then(|c| c.value.as_deref())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// Outbound interaction response.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Message(MessageData),
    Modal(ModalData),
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageData {
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: 1,
            data: None,
        }
    }

    /// Reply in the channel with one embed.
    pub fn embed(embed: Embed, ephemeral: bool) -> Self {
        Self {
            kind: 4,
            data: Some(ResponseData::Message(MessageData {
                embeds: vec![embed],
                flags: ephemeral.then_some(EPHEMERAL_FLAG),
            })),
        }
    }

    pub fn modal(modal: ModalData) -> Self {
        Self {
            kind: 9,
            data: Some(ResponseData::Modal(modal)),
        }
    }
}

/// Structured message body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    pub color: u32,
    /// ISO 8601
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            color,
            timestamp: crate::time_utils::format_utc_rfc3339(chrono::Utc::now()),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}

/// Modal popup with text inputs.
#[derive(Debug, Clone, Serialize)]
pub struct ModalData {
    pub custom_id: String,
    pub title: String,
    pub components: Vec<ModalRow>,
}

/// Action row (component type 1) wrapping a single text input.
#[derive(Debug, Clone, Serialize)]
pub struct ModalRow {
    #[serde(rename = "type")]
    pub kind: u8,
    pub components: Vec<TextInput>,
}

/// Text input (component type 4).
#[derive(Debug, Clone, Serialize)]
pub struct TextInput {
    #[serde(rename = "type")]
    pub kind: u8,
    pub custom_id: String,
    pub label: String,
    /// 1 = single line
    pub style: u8,
    pub min_length: u16,
    pub max_length: u16,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ModalRow {
    pub fn text_input(input: TextInput) -> Self {
        Self {
            kind: 1,
            components: vec![input],
        }
    }
}
