use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parley-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    /// The target row, or the row a foreign key points at, does not exist.
    #[error("entity not found")]
    NotFound,
}

/// Errors surfaced by chat operations.
///
/// Every variant is terminal for the request. The `Display` text of the
/// client-facing variants is the exact message returned over HTTP.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid body")]
    InvalidBody,

    #[error("invalid title length")]
    InvalidTitleLength,

    #[error("invalid text length")]
    InvalidTextLength,

    #[error("invalid chat id")]
    InvalidChatId,

    #[error("chat not found")]
    ChatNotFound,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
