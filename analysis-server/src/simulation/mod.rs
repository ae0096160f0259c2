//! What-If Scenario Calculator
//!
//! A standalone projection sharing the engine's calculation shape (rates
//! applied down the funnel, weighted cost ratios, zero-denominator guards)
//! but independent of the per-product analysis data. Results are rounded
//! to 2 decimal places for display; saved scenarios are immutable copies
//! of inputs and results at save time.

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{SavedScenario, ScenarioInputs, ScenarioResults};
use uuid::Uuid;

use crate::engine::round_display;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Compute projected results for a scenario
///
/// Zero denominators yield exactly 0 for the per-delivered figures, same
/// rule as the analysis engine.
pub fn compute(inputs: &ScenarioInputs) -> ScenarioResults {
    let confirmed_orders = inputs.total_orders * inputs.confirmation_rate / 100.0;
    let delivered_orders = confirmed_orders * inputs.delivery_rate / 100.0;

    let total_revenue = delivered_orders * inputs.selling_price;
    let product_cost_total = delivered_orders * inputs.product_cost;
    let service_fee_total = delivered_orders * inputs.service_fee;
    let total_costs = product_cost_total + service_fee_total + inputs.ads_cost + inputs.other_cost;
    let total_profit = total_revenue - total_costs;

    let per_delivered = |amount: f64| {
        if delivered_orders > 0.0 {
            amount / delivered_orders
        } else {
            0.0
        }
    };
    let cpa = if inputs.total_orders > 0.0 {
        inputs.ads_cost / inputs.total_orders
    } else {
        0.0
    };

    ScenarioResults {
        confirmed_orders: round_display(confirmed_orders),
        delivered_orders: round_display(delivered_orders),
        total_revenue: round_display(total_revenue),
        total_costs: round_display(total_costs),
        total_profit: round_display(total_profit),
        profit_per_delivered: round_display(per_delivered(total_profit)),
        cpa: round_display(cpa),
        cpad: round_display(per_delivered(inputs.ads_cost)),
        cpd: round_display(per_delivered(
            inputs.ads_cost + service_fee_total + product_cost_total,
        )),
    }
}

/// Saved scenario list
///
/// Entries are immutable once saved; re-running the calculator with new
/// inputs never touches what is already in the list.
#[derive(Default)]
pub struct ScenarioService {
    saved: RwLock<Vec<SavedScenario>>,
}

impl ScenarioService {
    pub fn new() -> Self {
        Self {
            saved: RwLock::new(Vec::new()),
        }
    }

    /// Compute and save a named scenario
    pub fn save(&self, name: &str, inputs: ScenarioInputs) -> AppResult<SavedScenario> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::ScenarioNameRequired));
        }

        let scenario = SavedScenario {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            results: compute(&inputs),
            inputs,
            created_at: Utc::now().timestamp_millis(),
        };

        self.saved.write().push(scenario.clone());
        tracing::info!(scenario_id = %scenario.id, name = %scenario.name, "Scenario saved");
        Ok(scenario)
    }

    /// Saved scenarios in save order
    pub fn list(&self) -> Vec<SavedScenario> {
        self.saved.read().clone()
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut saved = self.saved.write();
        let before = saved.len();
        saved.retain(|s| s.id != id);
        if saved.len() == before {
            return Err(AppError::new(ErrorCode::ScenarioNotFound).with_detail("id", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScenarioInputs {
        ScenarioInputs {
            total_orders: 100.0,
            confirmation_rate: 60.0,
            delivery_rate: 50.0,
            selling_price: 59.0,
            product_cost: 15.0,
            service_fee: 7.0,
            ads_cost: 300.0,
            other_cost: 50.0,
        }
    }

    #[test]
    fn test_funnel_and_profit() {
        let results = compute(&inputs());
        assert_eq!(results.confirmed_orders, 60.0);
        assert_eq!(results.delivered_orders, 30.0);
        assert_eq!(results.total_revenue, 30.0 * 59.0);
        // 30*(15+7) + 300 + 50 = 1010
        assert_eq!(results.total_costs, 1010.0);
        assert_eq!(results.total_profit, 1770.0 - 1010.0);
        assert_eq!(results.profit_per_delivered, round_display(760.0 / 30.0));
    }

    #[test]
    fn test_cost_ratios() {
        let results = compute(&inputs());
        assert_eq!(results.cpa, 3.0); // 300 / 100
        assert_eq!(results.cpad, 10.0); // 300 / 30
        // (300 + 30*7 + 30*15) / 30 = 960 / 30
        assert_eq!(results.cpd, 32.0);
    }

    #[test]
    fn test_zero_orders_never_divide() {
        let results = compute(&ScenarioInputs {
            total_orders: 0.0,
            ads_cost: 300.0,
            other_cost: 50.0,
            ..Default::default()
        });
        assert_eq!(results.delivered_orders, 0.0);
        assert_eq!(results.total_profit, -350.0);
        assert_eq!(results.profit_per_delivered, 0.0);
        assert_eq!(results.cpa, 0.0);
        assert_eq!(results.cpad, 0.0);
        assert_eq!(results.cpd, 0.0);
        assert!(results.total_profit.is_finite());
    }

    #[test]
    fn test_results_rounded_for_display() {
        let results = compute(&ScenarioInputs {
            total_orders: 3.0,
            confirmation_rate: 100.0,
            delivery_rate: 100.0,
            selling_price: 10.0,
            ads_cost: 1.0,
            ..Default::default()
        });
        // 1/3 rounds to 0.33
        assert_eq!(results.cpa, 0.33);
        assert_eq!(results.cpad, 0.33);
    }

    #[test]
    fn test_save_requires_name() {
        let svc = ScenarioService::new();
        let err = svc.save("  ", inputs()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNameRequired);
    }

    #[test]
    fn test_saved_scenarios_are_immutable_copies() {
        let svc = ScenarioService::new();
        let saved = svc.save("Baseline", inputs()).unwrap();

        // A later save with different inputs leaves the first entry alone.
        let mut changed = inputs();
        changed.ads_cost = 999.0;
        svc.save("Aggressive ads", changed).unwrap();

        let list = svc.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, saved.id);
        assert_eq!(list[0].inputs.ads_cost, 300.0);
        assert_eq!(list[0].results, saved.results);
    }

    #[test]
    fn test_delete_missing_scenario_is_an_error() {
        let svc = ScenarioService::new();
        let err = svc.delete("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::ScenarioNotFound);
    }
}
