//! Profitability Analysis Server
//!
//! Tracks e-commerce profitability per product, per country, and per time
//! period. Raw inputs (manual overrides, daily ad spend, country fee
//! defaults, product cost/price) are resolved through a per-field
//! precedence chain, derived into KPIs, and aggregated into weighted
//! country/period totals that can be captured as immutable snapshots.
//!
//! # Module structure
//!
//! ```text
//! analysis-server/src/
//! ├── core/          # Config, state, server bootstrap
//! ├── engine/        # Metric resolver, derived metrics, row aggregation
//! ├── stores/        # Catalog, override store, daily ad ledger
//! ├── snapshots/     # Snapshot manager and history rollup
//! ├── simulation/    # What-if scenario calculator
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Logger and helpers
//! ```

pub mod api;
pub mod core;
pub mod engine;
pub mod simulation;
pub mod snapshots;
pub mod stores;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use engine::{DerivedMetrics, ResolvedInputs, aggregate, derive, resolve};
pub use snapshots::{MemorySnapshotStore, SnapshotService, SnapshotStore};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load environment, read configuration, and initialize logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(None, config.log_dir.as_deref());
    config
}
