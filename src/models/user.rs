use serde::{Deserialize, Serialize};

/// Account role. Only affects display today; kept for parity with the
/// registration flow which always assigns `User`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// One owned copy of a card: (entry id, card code, rarity).
///
/// Serialized as a three-element JSON array so stored inventories stay
/// compatible with the `[id, code, rarity]` triples the client persists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry(pub u64, pub String, pub String);

impl InventoryEntry {
    pub fn new(entry_id: u64, code: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self(entry_id, code.into(), rarity.into())
    }

    pub fn entry_id(&self) -> u64 {
        self.0
    }

    pub fn code(&self) -> &str {
        &self.1
    }

    pub fn rarity(&self) -> &str {
        &self.2
    }
}

/// A registered account as held in the user store. Never serialized to
/// the wire; the password hash stays server-side.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub inventory: Vec<InventoryEntry>,
}

/// Wire-safe projection of a [`User`]: everything except the password hash.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub inventory: Vec<InventoryEntry>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            inventory: user.inventory.clone(),
        }
    }
}

/// Inventory granted to every fresh account.
pub fn starter_inventory() -> Vec<InventoryEntry> {
    vec![
        InventoryEntry::new(1, "OOF-31", "UR"),
        InventoryEntry::new(2, "OOF-31", "SR"),
        InventoryEntry::new(3, "OOF-01", "C"),
        InventoryEntry::new(4, "OOF-21", "R"),
    ]
}
