//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product lifecycle status
///
/// Governs default visibility filters in listings only; the engine's math
/// is identical for draft and active products.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub status: ProductStatus,
    /// Unit cost; multiplied by delivered quantity for product fees
    pub cost: f64,
    /// Selling price
    pub price: f64,
    /// Countries this product is assigned to (order irrelevant)
    pub country_ids: Vec<String>,
    /// Creative asset references (stored externally)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl Product {
    /// Check whether the product is assigned to the given country
    pub fn is_assigned_to(&self, country_id: &str) -> bool {
        self.country_ids.iter().any(|c| c == country_id)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "sku is required"))]
    pub sku: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub status: Option<ProductStatus>,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: f64,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    pub country_ids: Option<Vec<String>>,
    pub image: Option<String>,
    pub video: Option<String>,
}

/// Update product payload (typed partial update; only present fields change)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    pub cost: Option<f64>,
    pub price: Option<f64>,
    pub country_ids: Option<Vec<String>>,
    pub image: Option<String>,
    pub video: Option<String>,
}
