//! Chat and message endpoints.
//!
//! Request bodies are taken as raw bytes and decoded here, so a malformed or
//! mistyped body always answers `invalid body` whatever the request's
//! `Content-Type` says. Path ids go through the same funnel: any id that is
//! not a positive integer, including undecodable segments, is `invalid chat id`.

use std::collections::HashMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use parley_core::chat::validation::{parse_chat_id, resolve_limit};
use parley_types::chat::{
    Chat, ChatId, ChatWithMessages, CreateChatRequest, CreateMessageRequest, Message,
};
use parley_types::error::ChatError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Decode a JSON object body. Arrays, scalars and `null` are rejected even
/// when their shape would fit the target struct.
fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ChatError> {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => {
            serde_json::from_value(value).map_err(|_| ChatError::InvalidBody)
        }
        _ => Err(ChatError::InvalidBody),
    }
}

/// Resolve the `{id}` path segment, mapping extractor rejections
/// (e.g. invalid UTF-8 after percent-decoding) to `invalid chat id`.
fn chat_id_from_path(path: Result<Path<String>, PathRejection>) -> Result<ChatId, ChatError> {
    let Path(raw_id) = path.map_err(|_| ChatError::InvalidChatId)?;
    parse_chat_id(&raw_id)
}

/// POST /chats
pub async fn create_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Chat>), AppError> {
    let request: CreateChatRequest = decode_object(&body)?;

    let chat = state.chat_service.create_chat(request.title()).await?;
    Ok((StatusCode::CREATED, Json(chat)))
}

/// POST /chats/{id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let chat_id = chat_id_from_path(path)?;
    let payload = decode_object::<CreateMessageRequest>(&body);

    let message = state.chat_service.post_message(chat_id, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /chats/{id}?limit=N
///
/// Query parameters are collected into a map so that a malformed `limit`
/// falls back to the default instead of rejecting the request.
pub async fn get_chat(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ChatWithMessages>, AppError> {
    let chat_id = chat_id_from_path(path)?;
    let limit = resolve_limit(params.get("limit").map(String::as_str));

    let chat = state.chat_service.get_chat(chat_id, limit).await?;
    Ok(Json(chat))
}

/// DELETE /chats/{id}
pub async fn delete_chat(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let chat_id = chat_id_from_path(path)?;
    state.chat_service.delete_chat(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
