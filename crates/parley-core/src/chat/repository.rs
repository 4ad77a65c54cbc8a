//! ChatRepository trait definition.
//!
//! The storage port for chats and their messages. Records are never updated,
//! so the port only inserts, reads, and deletes.

use parley_types::chat::{Chat, ChatId, Message, NewChat, NewMessage};
use parley_types::error::RepositoryError;

/// Repository trait for chat and message persistence.
///
/// Implementations live in parley-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Insert a chat and return it with its assigned id.
    fn insert_chat(
        &self,
        chat: &NewChat,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Get a chat by id.
    fn find_chat(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// Insert a message and return it with its assigned id.
    ///
    /// The insert is the existence check for the owning chat: implementations
    /// must return `RepositoryError::NotFound` when `message.chat_id` does not
    /// reference a stored chat, without a separate lookup.
    fn insert_message(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Get up to `limit` messages of a chat, newest first.
    ///
    /// Ordered by `created_at` DESC, ties broken by id DESC.
    fn recent_messages(
        &self,
        chat_id: ChatId,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Delete a chat (messages cascade) and return the number of chat rows removed.
    fn delete_chat(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
