//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Catalog errors
/// - 2xxx: Analysis input errors
/// - 3xxx: Snapshot errors
/// - 4xxx: Simulation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Catalog errors (1xxx)
    Catalog,
    /// Analysis input errors (2xxx)
    Analysis,
    /// Snapshot errors (3xxx)
    Snapshot,
    /// Simulation errors (4xxx)
    Simulation,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Analysis,
            3000..4000 => Self::Snapshot,
            4000..5000 => Self::Simulation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Catalog => "catalog",
            Self::Analysis => "analysis",
            Self::Snapshot => "snapshot",
            Self::Simulation => "simulation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(1102), ErrorCategory::Catalog);

        assert_eq!(ErrorCategory::from_code(2101), ErrorCategory::Analysis);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Snapshot);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Simulation);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::CountryNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(
            ErrorCode::InvalidDateRange.category(),
            ErrorCategory::Analysis
        );
        assert_eq!(
            ErrorCode::SnapshotNotFound.category(),
            ErrorCategory::Snapshot
        );
        assert_eq!(
            ErrorCode::ScenarioNotFound.category(),
            ErrorCategory::Simulation
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Snapshot.name(), "snapshot");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
