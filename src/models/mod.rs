pub mod auth;
pub mod card;
pub mod session;
pub mod user;
