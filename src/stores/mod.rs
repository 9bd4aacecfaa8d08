pub mod card_store;
pub mod token_store;
pub mod user_store;
