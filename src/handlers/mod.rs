pub mod auth;
pub mod cards;
pub mod fallback;
pub mod health;
pub mod users;
