//! Chat service orchestrating validation and persistence.
//!
//! ChatService applies the input rules from [`validation`](super::validation),
//! issues the store operations on a `ChatRepository`, and shapes the results.

use chrono::Utc;
use parley_types::chat::{
    Chat, ChatId, ChatWithMessages, CreateMessageRequest, Message, NewChat, NewMessage,
};
use parley_types::error::{ChatError, RepositoryError};
use tracing::info;

use crate::chat::repository::ChatRepository;
use crate::chat::validation::{normalize_text, normalize_title};

/// Orchestrates the chat lifecycle: create, post messages, read, delete.
///
/// Generic over `ChatRepository` so parley-core never depends on parley-infra.
pub struct ChatService<R: ChatRepository> {
    repo: R,
}

impl<R: ChatRepository> ChatService<R> {
    /// Create a new chat service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the chat repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Create a chat with a trimmed, length-checked title.
    pub async fn create_chat(&self, title: &str) -> Result<Chat, ChatError> {
        let new_chat = NewChat {
            title: normalize_title(title)?,
            created_at: Utc::now(),
        };

        let chat = self.repo.insert_chat(&new_chat).await?;
        info!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    /// Post a message into a chat.
    ///
    /// `payload` is the decoded request body, or `ChatError::InvalidBody` when
    /// decoding failed. A missing chat is reported before any body or text
    /// problem. The insert itself detects a missing chat, so there is no
    /// window between an existence check and the write.
    pub async fn post_message(
        &self,
        chat_id: ChatId,
        payload: Result<CreateMessageRequest, ChatError>,
    ) -> Result<Message, ChatError> {
        let text = match payload.and_then(|request| normalize_text(request.text())) {
            Ok(text) => text,
            Err(err) => {
                self.require_chat(chat_id).await?;
                return Err(err);
            }
        };

        let new_message = NewMessage {
            chat_id,
            text,
            created_at: Utc::now(),
        };

        match self.repo.insert_message(&new_message).await {
            Ok(message) => {
                info!(chat_id, message_id = message.id, "Message posted");
                Ok(message)
            }
            Err(RepositoryError::NotFound) => Err(ChatError::ChatNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a chat with its `limit` most recent messages in chronological order.
    ///
    /// The page is fetched newest first and reversed, so older messages beyond
    /// the window are dropped rather than newer ones.
    pub async fn get_chat(
        &self,
        chat_id: ChatId,
        limit: u32,
    ) -> Result<ChatWithMessages, ChatError> {
        let chat = self.require_chat(chat_id).await?;

        let mut messages = self.repo.recent_messages(chat_id, limit).await?;
        messages.reverse();

        Ok(ChatWithMessages { chat, messages })
    }

    /// Delete a chat and, through the storage cascade, its messages.
    pub async fn delete_chat(&self, chat_id: ChatId) -> Result<(), ChatError> {
        let deleted = self.repo.delete_chat(chat_id).await?;
        if deleted == 0 {
            return Err(ChatError::ChatNotFound);
        }

        info!(chat_id, "Chat deleted");
        Ok(())
    }

    async fn require_chat(&self, chat_id: ChatId) -> Result<Chat, ChatError> {
        self.repo
            .find_chat(chat_id)
            .await?
            .ok_or(ChatError::ChatNotFound)
    }
}
