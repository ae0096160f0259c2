//! In-memory stores feeding the calculation engine
//!
//! All stores are explicit keyed objects (no module-level singletons),
//! owned by [`crate::core::ServerState`] and passed into the engine
//! functions, so they can be constructed in isolation for tests.
//!
//! Mutations are independent and last-write-wins per key; the unit of
//! contention (one account's own data) is not concurrently written by
//! other actors, so no further locking is layered on top of the maps.

pub mod ad_ledger;
pub mod catalog;
pub mod overrides;

pub use ad_ledger::AdLedger;
pub use catalog::CatalogStore;
pub use overrides::OverrideStore;
