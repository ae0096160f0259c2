//! Snapshot lifecycle and history rollup
//!
//! A snapshot is an immutable capture of one country's computed analysis
//! table under a period name. Persistence goes through the [`SnapshotStore`]
//! port so the service logic is independent of where snapshots live; the
//! server and tests use the in-memory implementation.

pub mod history;
pub mod manager;
pub mod store;

pub use history::{
    CountryRollup, SortColumn, SortDirection, SortState, by_country, search, sort_periods, summary,
};
pub use manager::SnapshotService;
pub use store::{MemorySnapshotStore, SnapshotStore};
