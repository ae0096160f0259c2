//! Simulation Scenario Model
//!
//! A what-if calculator sharing the engine's calculation shape, but
//! independent of the per-product analysis data.

use serde::{Deserialize, Serialize};

/// Scenario inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    pub total_orders: f64,
    /// Expected confirmation rate, percent
    pub confirmation_rate: f64,
    /// Expected delivery rate (of confirmed), percent
    pub delivery_rate: f64,
    pub selling_price: f64,
    pub product_cost: f64,
    /// Service fee per delivered order
    pub service_fee: f64,
    pub ads_cost: f64,
    pub other_cost: f64,
}

/// Computed scenario results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResults {
    pub confirmed_orders: f64,
    pub delivered_orders: f64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub profit_per_delivered: f64,
    pub cpa: f64,
    pub cpad: f64,
    pub cpd: f64,
}

/// A saved scenario: an immutable copy of inputs and results at save time
///
/// Editing the live scenario form later does not retroactively change
/// entries already saved to the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScenario {
    pub id: String,
    pub name: String,
    pub inputs: ScenarioInputs,
    pub results: ScenarioResults,
    /// Save timestamp (Unix millis)
    pub created_at: i64,
}
