//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds:
//! - The database connection pool
//! - The bearer token signer and validator
//! - The client for the text generation endpoint behind the assistant

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenService, chatbot::client::OllamaClient};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its secret behind an `Arc`
/// - `OllamaClient` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens on sign-in and validates them in `AuthGuard`.
    pub tokens: TokenService,

    /// Client for the language model used by the assistant.
    pub ollama: OllamaClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, ollama: OllamaClient) -> Self {
        Self { db, tokens, ollama }
    }
}
