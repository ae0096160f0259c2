//! Country Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Country entity with its default per-order fee components
///
/// The default fees feed the metric resolver: when no service-fee override
/// exists for a product, service fees resolve to
/// `delivered_orders * fee_per_order()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    /// Currency code (e.g. "MAD", "XOF")
    pub currency: String,
    /// ISO 3166-1 alpha-2 code (e.g. "MA", "SN")
    pub iso_code: String,
    /// Default shipping fee per delivered order
    pub default_shipping: f64,
    /// Default cash-on-delivery fee per delivered order
    pub default_cod: f64,
    /// Default return fee per delivered order
    pub default_return: f64,
}

impl Country {
    /// Combined default fee charged per delivered order
    pub fn fee_per_order(&self) -> f64 {
        self.default_shipping + self.default_cod + self.default_return
    }
}

/// Create country payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountryCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,
    pub iso_code: String,
    #[validate(range(min = 0.0, message = "fee must be non-negative"))]
    pub default_shipping: f64,
    #[validate(range(min = 0.0, message = "fee must be non-negative"))]
    pub default_cod: f64,
    #[validate(range(min = 0.0, message = "fee must be non-negative"))]
    pub default_return: f64,
}

/// Update country payload (typed partial update; only present fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryUpdate {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub iso_code: Option<String>,
    pub default_shipping: Option<f64>,
    pub default_cod: Option<f64>,
    pub default_return: Option<f64>,
}
