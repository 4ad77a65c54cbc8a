//! Shared domain types for Parley.
//!
//! Chat and Message records, request bodies, the error taxonomy, and server
//! configuration.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
