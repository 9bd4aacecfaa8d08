// Application state (AppState)

use crate::core::config::Config;
use crate::stores::{card_store::CardStore, token_store::TokenStore, user_store::UserStore};
use std::sync::Arc;

/// Shared application state
///
/// Contains all shared components that are accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across threads.
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts
    pub users: Arc<UserStore>,

    /// Live session tokens
    pub tokens: Arc<TokenStore>,

    /// The card catalog
    pub cards: Arc<CardStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            tokens: Arc::new(TokenStore::new()),
            cards: Arc::new(CardStore::new()),
            config: Arc::new(config),
        }
    }
}
