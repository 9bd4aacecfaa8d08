use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::auth::password::hash_password;
use crate::core::state::AppState;
use crate::models::card::Card;
use crate::models::user::{starter_inventory, Role, User};
use crate::utils::object_id::new_object_id;

// Runs at boot time
pub fn seed_catalog(state: &AppState, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read card catalog: {}", path.display()))?;

    let cards: Vec<Card> =
        serde_json::from_str(&content).context("Failed to parse card catalog")?;

    let count = cards.len();
    state.cards.replace_all(cards);

    info!(cards = count, path = %path.display(), "Card catalog loaded");

    Ok(count)
}

/// Seed two demo accounts into an empty user store. A store that
/// already has users is left untouched.
pub fn seed_sample_users(state: &AppState) -> Result<()> {
    if !state.users.is_empty() {
        info!(
            users = state.users.len(),
            "User store already populated, skipping sample users"
        );
        return Ok(());
    }

    let cost = state.config.auth.bcrypt_cost;
    let samples = [
        ("admin", "admin@example.com", "admin123", Role::Admin),
        ("user", "user@example.com", "user123", Role::User),
    ];

    for (username, email, password, role) in samples {
        let user = User {
            id: new_object_id(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password, cost)?,
            role,
            inventory: starter_inventory(),
        };
        state
            .users
            .insert_unique(user)
            .context("Failed to seed sample user")?;
    }

    info!(users = state.users.len(), "Sample users seeded");

    Ok(())
}
