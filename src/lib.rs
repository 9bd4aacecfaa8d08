pub mod core;
pub mod models;
pub mod stores;
pub mod auth;
pub mod inventory;
pub mod api;
pub mod validation;
pub mod utils;
pub mod handlers;
