//! HTTP API layer for Parley.
//!
//! Axum router over the chat service. Every response carries
//! `Content-Type: application/json`; errors use a `{"error": "..."}` body.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
