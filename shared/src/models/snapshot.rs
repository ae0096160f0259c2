//! Analysis Snapshot Model
//!
//! A snapshot is an immutable, named, dated capture of a fully computed
//! analysis table for one country. Country name and currency are
//! denormalized at save time so sinks need no catalog join.

use serde::{Deserialize, Serialize};

/// One fully computed analysis row: resolved inputs plus derived metrics
///
/// This flat struct is the engine's sole contract with export sinks
/// (spreadsheet, PDF, image): one flat object per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRow {
    pub product_id: String,
    pub product_name: String,
    pub product_sku: String,

    // -- Resolved inputs --
    pub total_orders: f64,
    pub orders_confirmed: f64,
    pub delivered_orders: f64,
    pub quantity_delivery: f64,
    pub revenue: f64,
    pub ads: f64,
    pub service_fees: f64,
    pub product_fees: f64,

    // -- Derived metrics --
    pub confirmation_rate: f64,
    pub delivery_rate: f64,
    pub delivery_rate_per_lead: f64,
    pub profit: f64,
    pub margin: f64,
    /// Ad spend per order; None when there are no orders (rendered as "–")
    pub cpa: Option<f64>,
    /// Ad spend per delivered order; None when nothing was delivered
    pub cpad: Option<f64>,
    /// All costs per delivered order; None when nothing was delivered
    pub cpd: Option<f64>,
}

/// Weighted totals over a set of analysis rows
///
/// Additive fields are sums; rate-like fields are recomputed from the
/// summed numerators and denominators, never averaged across rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTotals {
    pub total_orders: f64,
    pub orders_confirmed: f64,
    pub delivered_orders: f64,
    pub quantity_delivery: f64,
    pub total_revenue: f64,
    pub total_ads: f64,
    pub total_service_fees: f64,
    pub total_product_fees: f64,
    pub profit: f64,
    pub margin: f64,
    pub confirmation_rate: f64,
    pub delivery_rate: f64,
    pub delivery_rate_per_lead: f64,
    pub cpa: Option<f64>,
    pub cpad: Option<f64>,
    pub cpd: Option<f64>,
}

/// Immutable capture of a computed analysis table for one country
///
/// Invariant: `totals` equals the weighted aggregation of `rows` at save
/// time; it is never edited independently. "Editing" a snapshot means
/// loading its rows back into the override store and saving again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    pub id: String,
    pub period_name: String,
    pub country_id: String,
    /// Country name at save time
    pub country_name: String,
    /// Currency code at save time
    pub currency: String,
    /// Ordered per-product rows
    pub rows: Vec<AnalysisRow>,
    /// Pre-aggregated totals block
    pub totals: AnalysisTotals,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}
