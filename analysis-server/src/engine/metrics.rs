//! Derived Metrics Calculator
//!
//! Turns a resolved input-field set into the computed ratios and profit
//! figures. Zero-denominator divisions are guarded explicitly and produce
//! exactly 0 (never NaN or Infinity); these numbers feed financial
//! decisions and must stay well-defined for every input.

use super::resolver::ResolvedInputs;

/// Computed ratios and profit figures for one row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedMetrics {
    /// Confirmed orders as a percentage of total orders
    pub confirmation_rate: f64,
    /// Delivered orders as a percentage of confirmed orders
    pub delivery_rate: f64,
    /// Delivered orders as a percentage of total orders (per lead)
    pub delivery_rate_per_lead: f64,
    /// Revenue minus ads, service fees, and product fees
    pub profit: f64,
    /// Profit as a percentage of revenue
    pub margin: f64,
}

/// Percentage of `num` over `den`, exactly 0 when the denominator is not positive
#[inline]
pub(crate) fn pct(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den * 100.0 } else { 0.0 }
}

/// `num / den` as an efficiency ratio, None when the denominator is not positive
///
/// None is rendered by sinks as a placeholder ("–"), distinct from 0.
#[inline]
pub(crate) fn ratio(num: f64, den: f64) -> Option<f64> {
    if den > 0.0 { Some(num / den) } else { None }
}

/// Derive the computed metrics from resolved inputs
pub fn derive(resolved: &ResolvedInputs) -> DerivedMetrics {
    let profit =
        resolved.revenue - resolved.ads - resolved.service_fees - resolved.product_fees;

    DerivedMetrics {
        confirmation_rate: pct(resolved.orders_confirmed, resolved.total_orders),
        delivery_rate: pct(resolved.delivered_orders, resolved.orders_confirmed),
        delivery_rate_per_lead: pct(resolved.delivered_orders, resolved.total_orders),
        profit,
        margin: pct(profit, resolved.revenue),
    }
}
