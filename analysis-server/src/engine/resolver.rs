//! Metric Resolver
//!
//! Decides, per field, which raw input wins when multiple sources exist:
//! live daily-ad totals, manual overrides, country fee defaults, and
//! product cost. Each field has its own precedence chain; there is no
//! single global rule.

use shared::models::{AnalysisOverride, Country, Product};

/// The final input values chosen for one (product, country) pair
///
/// Produced by [`resolve`]; consumed by [`crate::engine::derive`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedInputs {
    pub revenue: f64,
    pub ads: f64,
    pub service_fees: f64,
    pub product_fees: f64,
    pub delivered_orders: f64,
    pub total_orders: f64,
    pub orders_confirmed: f64,
    pub quantity_delivery: f64,
}

/// Resolve the input-field set for one product in one country
///
/// Precedence, per field:
/// - `ads`: daily ad total when present and > 0, else the override, else 0.
///   A daily total of exactly 0 is treated as "no data" and falls through
///   to the override. This matches the historical behavior and is kept
///   deliberately; see the regression test below.
/// - `service_fees`: override when present and > 0, else
///   `delivered_orders * country fee-per-order`. `delivered_orders` is
///   resolved first because of this dependency.
/// - `product_fees`: `quantity_delivery * product.cost` when any quantity
///   was delivered, else the override, else 0.
/// - order counts and `revenue`: override when present, else 0.
///
/// Negative inputs pass through unclamped.
pub fn resolve(
    product: &Product,
    country: &Country,
    ov: &AnalysisOverride,
    daily_ad_total: Option<f64>,
) -> ResolvedInputs {
    // Order counts resolve first; service_fees reads delivered_orders.
    let delivered_orders = ov.delivered_orders.unwrap_or(0.0);
    let total_orders = ov.total_orders.unwrap_or(0.0);
    let orders_confirmed = ov.orders_confirmed.unwrap_or(0.0);
    let quantity_delivery = ov.quantity_delivery.unwrap_or(0.0);

    let revenue = ov.revenue.unwrap_or(0.0);

    let ads = match daily_ad_total {
        Some(total) if total > 0.0 => total,
        _ => ov.ads.unwrap_or(0.0),
    };

    let service_fees = match ov.service_fees {
        Some(fees) if fees > 0.0 => fees,
        _ => delivered_orders * country.fee_per_order(),
    };

    let product_fees = if quantity_delivery > 0.0 {
        quantity_delivery * product.cost
    } else {
        ov.product_fees.unwrap_or(0.0)
    };

    ResolvedInputs {
        revenue,
        ads,
        service_fees,
        product_fees,
        delivered_orders,
        total_orders,
        orders_confirmed,
        quantity_delivery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_country(shipping: f64, cod: f64, ret: f64) -> Country {
        Country {
            id: "c1".into(),
            name: "Morocco".into(),
            currency: "MAD".into(),
            iso_code: "MA".into(),
            default_shipping: shipping,
            default_cod: cod,
            default_return: ret,
        }
    }

    fn make_product(cost: f64) -> Product {
        Product {
            id: "p1".into(),
            sku: "SKU-1".into(),
            name: "Test product".into(),
            status: Default::default(),
            cost,
            price: 59.0,
            country_ids: vec!["c1".into()],
            image: None,
            video: None,
        }
    }

    #[test]
    fn test_ads_prefers_positive_daily_total() {
        let ov = AnalysisOverride {
            ads: Some(40.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, Some(75.0));
        assert_eq!(resolved.ads, 75.0);
    }

    #[test]
    fn test_ads_zero_daily_total_falls_through_to_override() {
        // A zero daily total means "no data", not "spent nothing".
        let ov = AnalysisOverride {
            ads: Some(40.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, Some(0.0));
        assert_eq!(resolved.ads, 40.0);
    }

    #[test]
    fn test_ads_absent_daily_total_uses_override() {
        let ov = AnalysisOverride {
            ads: Some(40.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, None);
        assert_eq!(resolved.ads, 40.0);
    }

    #[test]
    fn test_ads_defaults_to_zero() {
        let resolved = resolve(
            &make_product(15.0),
            &make_country(2.0, 1.0, 2.0),
            &AnalysisOverride::default(),
            None,
        );
        assert_eq!(resolved.ads, 0.0);
    }

    #[test]
    fn test_service_fees_computed_from_delivered_orders() {
        let ov = AnalysisOverride {
            delivered_orders: Some(10.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, None);
        assert_eq!(resolved.service_fees, 50.0);
    }

    #[test]
    fn test_service_fees_override_wins_when_positive() {
        let ov = AnalysisOverride {
            delivered_orders: Some(10.0),
            service_fees: Some(33.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, None);
        assert_eq!(resolved.service_fees, 33.0);
    }

    #[test]
    fn test_service_fees_zero_override_falls_back_to_computed() {
        let ov = AnalysisOverride {
            delivered_orders: Some(10.0),
            service_fees: Some(0.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(2.0, 1.0, 2.0), &ov, None);
        assert_eq!(resolved.service_fees, 50.0);
    }

    #[test]
    fn test_product_fees_from_quantity_times_cost() {
        // Delivered quantity beats any product-fees override.
        let ov = AnalysisOverride {
            quantity_delivery: Some(3.0),
            product_fees: Some(999.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(0.0, 0.0, 0.0), &ov, None);
        assert_eq!(resolved.product_fees, 45.0);
    }

    #[test]
    fn test_product_fees_override_when_no_quantity() {
        let ov = AnalysisOverride {
            product_fees: Some(120.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(0.0, 0.0, 0.0), &ov, None);
        assert_eq!(resolved.product_fees, 120.0);
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let ov = AnalysisOverride {
            revenue: Some(-50.0),
            ads: Some(-10.0),
            ..Default::default()
        };
        let resolved = resolve(&make_product(15.0), &make_country(0.0, 0.0, 0.0), &ov, None);
        assert_eq!(resolved.revenue, -50.0);
        assert_eq!(resolved.ads, -10.0);
    }

    #[test]
    fn test_unset_fields_resolve_to_zero() {
        let resolved = resolve(
            &make_product(15.0),
            &make_country(0.0, 0.0, 0.0),
            &AnalysisOverride::default(),
            None,
        );
        assert_eq!(resolved, ResolvedInputs::default());
    }
}
