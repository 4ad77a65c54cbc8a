//! Infrastructure layer for Parley.
//!
//! Contains the SQLite implementation of the `ChatRepository` trait defined in
//! `parley-core`, the connection pool with embedded migrations, and the
//! configuration file loader.

pub mod config;
pub mod sqlite;
