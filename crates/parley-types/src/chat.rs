//! Chat and message types for Parley.
//!
//! A chat owns an ordered list of messages. Both records are immutable once
//! stored: the lifecycle is create, read, delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage identifier of a chat.
pub type ChatId = i64;

/// Storage identifier of a message.
pub type MessageId = i64;

/// Maximum title length in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum message text length in characters, after trimming.
pub const MAX_TEXT_CHARS: usize = 5000;

/// A stored chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A stored message belonging to a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A chat together with a page of its most recent messages.
///
/// Messages are in chronological order (oldest of the page first). The
/// `messages` key is always serialized, even when the page is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWithMessages {
    #[serde(flatten)]
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// A validated chat that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewChat {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A validated message that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /chats`. A missing or `null` title reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateChatRequest {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /chats/{id}/messages`. A missing or `null` text reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateMessageRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}
