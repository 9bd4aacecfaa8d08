use crate::models::card::Card;
use std::sync::RwLock;

/// The card catalog. Loaded once at startup, then read-only; the lock
/// exists so seeding can replace the contents after construction.
pub struct CardStore {
    cards: RwLock<Vec<Card>>,
}

impl CardStore {
    /// Create an empty CardStore instance
    pub fn new() -> Self {
        Self {
            cards: RwLock::new(Vec::new()),
        }
    }

    /// Replace the catalog with a new card list
    pub fn replace_all(&self, cards: Vec<Card>) {
        *self.cards.write().expect("card store lock poisoned") = cards;
    }

    /// Get the full catalog as an owned list
    pub fn all(&self) -> Vec<Card> {
        self.cards.read().expect("card store lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.cards.read().expect("card store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.read().expect("card store lock poisoned").is_empty()
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}
