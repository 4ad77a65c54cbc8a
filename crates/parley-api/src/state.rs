//! Shared application state for the HTTP server.

use std::sync::Arc;

use parley_core::chat::service::ChatService;
use parley_infra::sqlite::chat::SqliteChatRepository;
use parley_infra::sqlite::pool::DatabasePool;

/// Concrete service type used by the HTTP handlers.
pub type AppChatService = ChatService<SqliteChatRepository>;

/// State shared by every request handler.
///
/// Cloning is cheap: the service sits behind an `Arc` and the pool handles
/// are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<AppChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Open the database (running migrations) and build the state.
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;
        Ok(Self::from_pool(db_pool))
    }

    /// Build the state around an already opened pool.
    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let chat_repo = SqliteChatRepository::new(db_pool.clone());
        Self {
            chat_service: Arc::new(ChatService::new(chat_repo)),
            db_pool,
        }
    }
}
