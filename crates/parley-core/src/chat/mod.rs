//! Chat persistence abstractions and business rules for Parley.
//!
//! Defines the `ChatRepository` trait that the infrastructure layer
//! implements, the input validation rules, and the `ChatService` that ties
//! them together.

pub mod repository;
pub mod service;
pub mod validation;
