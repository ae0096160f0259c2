//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CountryNotFound
            | Self::ProductNotFound
            | Self::OverrideNotFound
            | Self::SnapshotNotFound
            | Self::ScenarioNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::CountryNameExists | Self::ProductSkuExists => {
                StatusCode::CONFLICT
            }

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::InvalidDateRange
            | Self::NegativeAdAmount
            | Self::PeriodNameRequired
            | Self::SnapshotRowsEmpty
            | Self::ScenarioNameRequired => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::PersistenceError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
