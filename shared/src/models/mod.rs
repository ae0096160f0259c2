//! Domain models for the profitability analysis engine
//!
//! All wire-facing structs serialize as camelCase; this is the flat,
//! export-ready shape consumed by clients and export sinks.

pub mod country;
pub mod daily_ad;
pub mod overrides;
pub mod product;
pub mod simulation;
pub mod snapshot;

// Re-exports
pub use country::{Country, CountryCreate, CountryUpdate};
pub use daily_ad::DailyAdEntry;
pub use overrides::{AnalysisOverride, OverridePatch};
pub use product::{Product, ProductCreate, ProductStatus, ProductUpdate};
pub use simulation::{SavedScenario, ScenarioInputs, ScenarioResults};
pub use snapshot::{AnalysisRow, AnalysisSnapshot, AnalysisTotals};
