//! Calculation engine
//!
//! Pure, synchronous functions over in-memory data. The pipeline is:
//!
//! ```text
//! fee defaults + overrides + daily ad totals
//!     -> resolve()    per-field precedence          (resolver)
//!     -> derive()     ratios and profit             (metrics)
//!     -> build_table  per-product rows              (rows)
//!     -> aggregate()  weighted totals               (aggregate)
//! ```
//!
//! Everything here is side-effect free and safe to call repeatedly, in any
//! order, for a given input snapshot.

pub mod aggregate;
pub mod metrics;
pub mod resolver;
pub mod rows;

pub use aggregate::{aggregate, aggregate_totals};
pub use metrics::{DerivedMetrics, derive};
pub use resolver::{ResolvedInputs, resolve};
pub use rows::{AnalysisTable, build_row, build_table, round_display};
