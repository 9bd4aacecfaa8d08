use crate::models::user::User;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("user with that email or username already exists")]
pub struct DuplicateUser;

/// In-memory collection of registered users, keyed by id.
///
/// Email and username uniqueness is enforced here rather than in the
/// handlers, so two concurrent registrations cannot both pass an
/// existence check and insert.
pub struct UserStore {
    users: DashMap<String, Arc<User>>,
    /// Serializes uniqueness check + insert in `insert_unique`
    write_guard: Mutex<()>,
}

impl UserStore {
    /// Create a new UserStore instance
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
            write_guard: Mutex::new(()),
        }
    }

    /// Insert a user, refusing when its email or username is taken.
    /// Comparison is case-sensitive, matching lookup.
    pub fn insert_unique(&self, user: User) -> Result<Arc<User>, DuplicateUser> {
        let _guard = self.write_guard.lock().expect("user store lock poisoned");

        let taken = self
            .users
            .iter()
            .any(|entry| entry.value().email == user.email || entry.value().username == user.username);
        if taken {
            return Err(DuplicateUser);
        }

        let user = Arc::new(user);
        self.users.insert(user.id.clone(), Arc::clone(&user));
        Ok(user)
    }

    /// Get a user by id
    /// Returns a clone of the user if found
    pub fn get(&self, id: &str) -> Option<Arc<User>> {
        self.users.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Get a user by email
    /// Note: This is a linear search and should be used sparingly
    pub fn find_by_email(&self, email: &str) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Get a user by username
    /// Note: This is a linear search and should be used sparingly
    pub fn find_by_username(&self, username: &str) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|entry| entry.value().username == username)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Remove a user by id
    /// Returns the removed user if it existed
    pub fn remove(&self, id: &str) -> Option<Arc<User>> {
        self.users.remove(id).map(|(_, user)| user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
