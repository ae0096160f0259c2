//! Analysis Override Model
//!
//! Manually entered metric values, keyed by (country, product). Absence of
//! a field is distinct from zero: an unset field falls through the metric
//! resolver's precedence chain, a present zero does not.

use serde::{Deserialize, Serialize};

/// Manually entered metric values for one (country, product) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOverride {
    pub revenue: Option<f64>,
    pub ads: Option<f64>,
    pub service_fees: Option<f64>,
    pub product_fees: Option<f64>,
    pub delivered_orders: Option<f64>,
    pub total_orders: Option<f64>,
    pub orders_confirmed: Option<f64>,
    pub quantity_delivery: Option<f64>,
}

impl AnalysisOverride {
    /// True when no field has ever been set
    pub fn is_empty(&self) -> bool {
        self.revenue.is_none()
            && self.ads.is_none()
            && self.service_fees.is_none()
            && self.product_fees.is_none()
            && self.delivered_orders.is_none()
            && self.total_orders.is_none()
            && self.orders_confirmed.is_none()
            && self.quantity_delivery.is_none()
    }

    /// Merge a patch into this override
    ///
    /// Only fields present in the patch are written; everything else keeps
    /// its prior value (including stale values from earlier edits).
    pub fn merge(&mut self, patch: &OverridePatch) {
        if let Some(v) = patch.revenue {
            self.revenue = Some(v);
        }
        if let Some(v) = patch.ads {
            self.ads = Some(v);
        }
        if let Some(v) = patch.service_fees {
            self.service_fees = Some(v);
        }
        if let Some(v) = patch.product_fees {
            self.product_fees = Some(v);
        }
        if let Some(v) = patch.delivered_orders {
            self.delivered_orders = Some(v);
        }
        if let Some(v) = patch.total_orders {
            self.total_orders = Some(v);
        }
        if let Some(v) = patch.orders_confirmed {
            self.orders_confirmed = Some(v);
        }
        if let Some(v) = patch.quantity_delivery {
            self.quantity_delivery = Some(v);
        }
    }
}

/// Partial update for an [`AnalysisOverride`]
///
/// Typed enumeration of exactly the fields a cell edit may patch;
/// send only changed fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverridePatch {
    pub revenue: Option<f64>,
    pub ads: Option<f64>,
    pub service_fees: Option<f64>,
    pub product_fees: Option<f64>,
    pub delivered_orders: Option<f64>,
    pub total_orders: Option<f64>,
    pub orders_confirmed: Option<f64>,
    pub quantity_delivery: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_present_fields() {
        let mut ov = AnalysisOverride {
            revenue: Some(100.0),
            ads: Some(10.0),
            ..Default::default()
        };
        ov.merge(&OverridePatch {
            ads: Some(25.0),
            total_orders: Some(40.0),
            ..Default::default()
        });

        assert_eq!(ov.revenue, Some(100.0));
        assert_eq!(ov.ads, Some(25.0));
        assert_eq!(ov.total_orders, Some(40.0));
        assert_eq!(ov.service_fees, None);
    }

    #[test]
    fn test_zero_is_a_value_not_absence() {
        let mut ov = AnalysisOverride::default();
        ov.merge(&OverridePatch {
            ads: Some(0.0),
            ..Default::default()
        });
        assert_eq!(ov.ads, Some(0.0));
        assert!(!ov.is_empty());
    }
}
