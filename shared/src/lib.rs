//! Shared types for the profitability analysis engine
//!
//! Domain models, the unified error system, and the serializable
//! snapshot/scenario types consumed by the analysis server and by
//! external sinks (exporters, clients).

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
