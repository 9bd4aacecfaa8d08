//! Pure inventory logic: card-code normalization, display filtering,
//! and reconciliation of an inventory against the catalog. Nothing in
//! here touches stores or the network.

pub mod codes;
pub mod filter;
pub mod reconcile;

pub use codes::{legacy_code, normalize_code, owned_codes};
pub use filter::{filter_options, CardFilter, FilterOptions};
pub use reconcile::{completion_percent, reconcile, CollectionStats, OwnedCard, Reconciliation};
