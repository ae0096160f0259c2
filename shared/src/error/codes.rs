//! Unified error codes for the analysis engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors (countries, products)
//! - 2xxx: Analysis input errors (overrides, ad spend)
//! - 3xxx: Snapshot errors
//! - 4xxx: Simulation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Catalog ====================
    /// Country not found
    CountryNotFound = 1001,
    /// Country name already exists
    CountryNameExists = 1002,
    /// Product not found
    ProductNotFound = 1101,
    /// Product SKU already exists
    ProductSkuExists = 1102,

    // ==================== 2xxx: Analysis Inputs ====================
    /// Override entry not found
    OverrideNotFound = 2001,
    /// Date range is invalid (start after end, unparseable dates)
    InvalidDateRange = 2101,
    /// Ad spend amount must be non-negative
    NegativeAdAmount = 2102,

    // ==================== 3xxx: Snapshot ====================
    /// Snapshot not found
    SnapshotNotFound = 3001,
    /// Period name is required when saving a snapshot
    PeriodNameRequired = 3002,
    /// Snapshot must contain at least one row
    SnapshotRowsEmpty = 3003,

    // ==================== 4xxx: Simulation ====================
    /// Saved scenario not found
    ScenarioNotFound = 4001,
    /// Scenario name is required when saving
    ScenarioNameRequired = 4002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Persistence layer error
    PersistenceError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Catalog
            ErrorCode::CountryNotFound => "Country not found",
            ErrorCode::CountryNameExists => "Country name already exists",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductSkuExists => "Product SKU already exists",

            // Analysis inputs
            ErrorCode::OverrideNotFound => "Override entry not found",
            ErrorCode::InvalidDateRange => "Date range is invalid",
            ErrorCode::NegativeAdAmount => "Ad spend amount must be non-negative",

            // Snapshot
            ErrorCode::SnapshotNotFound => "Snapshot not found",
            ErrorCode::PeriodNameRequired => "Period name is required",
            ErrorCode::SnapshotRowsEmpty => "Snapshot must contain at least one row",

            // Simulation
            ErrorCode::ScenarioNotFound => "Scenario not found",
            ErrorCode::ScenarioNameRequired => "Scenario name is required",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::PersistenceError => "Persistence layer error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Catalog
            1001 => Ok(ErrorCode::CountryNotFound),
            1002 => Ok(ErrorCode::CountryNameExists),
            1101 => Ok(ErrorCode::ProductNotFound),
            1102 => Ok(ErrorCode::ProductSkuExists),

            // Analysis inputs
            2001 => Ok(ErrorCode::OverrideNotFound),
            2101 => Ok(ErrorCode::InvalidDateRange),
            2102 => Ok(ErrorCode::NegativeAdAmount),

            // Snapshot
            3001 => Ok(ErrorCode::SnapshotNotFound),
            3002 => Ok(ErrorCode::PeriodNameRequired),
            3003 => Ok(ErrorCode::SnapshotRowsEmpty),

            // Simulation
            4001 => Ok(ErrorCode::ScenarioNotFound),
            4002 => Ok(ErrorCode::ScenarioNameRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::PersistenceError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
