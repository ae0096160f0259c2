//! Row Aggregator
//!
//! Combines per-product rows into a weighted totals block. Additive fields
//! are summed; rate-like fields are recomputed from the summed numerators
//! and denominators. Averaging per-row rates would let a single large
//! outlier pull the global rate toward an unweighted mean, so it is never
//! done here.

use shared::models::{AnalysisRow, AnalysisTotals};

use super::metrics::{pct, ratio};

/// Aggregate per-product rows into a weighted totals block
pub fn aggregate(rows: &[AnalysisRow]) -> AnalysisTotals {
    let mut totals = AnalysisTotals::default();

    for row in rows {
        totals.total_orders += row.total_orders;
        totals.orders_confirmed += row.orders_confirmed;
        totals.delivered_orders += row.delivered_orders;
        totals.quantity_delivery += row.quantity_delivery;
        totals.total_revenue += row.revenue;
        totals.total_ads += row.ads;
        totals.total_service_fees += row.service_fees;
        totals.total_product_fees += row.product_fees;
        totals.profit += row.profit;
    }

    finish(totals)
}

/// Aggregate already-aggregated totals blocks with the same weighted rule
///
/// Used by the history rollup: snapshot totals are trusted as-is and
/// re-summed; rates are recomputed from the combined sums.
pub fn aggregate_totals<'a, I>(blocks: I) -> AnalysisTotals
where
    I: IntoIterator<Item = &'a AnalysisTotals>,
{
    let mut totals = AnalysisTotals::default();

    for block in blocks {
        totals.total_orders += block.total_orders;
        totals.orders_confirmed += block.orders_confirmed;
        totals.delivered_orders += block.delivered_orders;
        totals.quantity_delivery += block.quantity_delivery;
        totals.total_revenue += block.total_revenue;
        totals.total_ads += block.total_ads;
        totals.total_service_fees += block.total_service_fees;
        totals.total_product_fees += block.total_product_fees;
        totals.profit += block.profit;
    }

    finish(totals)
}

/// Recompute the rate-like fields from the summed numerators/denominators
fn finish(mut totals: AnalysisTotals) -> AnalysisTotals {
    totals.confirmation_rate = pct(totals.orders_confirmed, totals.total_orders);
    totals.delivery_rate = pct(totals.delivered_orders, totals.orders_confirmed);
    totals.delivery_rate_per_lead = pct(totals.delivered_orders, totals.total_orders);
    totals.margin = pct(totals.profit, totals.total_revenue);
    totals.cpa = ratio(totals.total_ads, totals.total_orders);
    totals.cpad = ratio(totals.total_ads, totals.delivered_orders);
    totals.cpd = ratio(
        totals.total_ads + totals.total_service_fees + totals.total_product_fees,
        totals.delivered_orders,
    );
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(total_orders: f64, confirmed: f64, delivered: f64, revenue: f64, ads: f64) -> AnalysisRow {
        AnalysisRow {
            product_id: "p".into(),
            product_name: "P".into(),
            product_sku: "SKU".into(),
            total_orders,
            orders_confirmed: confirmed,
            delivered_orders: delivered,
            quantity_delivery: 0.0,
            revenue,
            ads,
            service_fees: 0.0,
            product_fees: 0.0,
            confirmation_rate: pct(confirmed, total_orders),
            delivery_rate: pct(delivered, confirmed),
            delivery_rate_per_lead: pct(delivered, total_orders),
            profit: revenue - ads,
            margin: pct(revenue - ads, revenue),
            cpa: ratio(ads, total_orders),
            cpad: ratio(ads, delivered),
            cpd: ratio(ads, delivered),
        }
    }

    #[test]
    fn test_weighted_not_averaged() {
        // (10/20) and (5/5): weighted rate is 15/25 = 60%, not the 75%
        // average of the per-row rates.
        let rows = vec![row(20.0, 10.0, 0.0, 0.0, 0.0), row(5.0, 5.0, 0.0, 0.0, 0.0)];
        let totals = aggregate(&rows);
        assert_eq!(totals.confirmation_rate, 60.0);
    }

    #[test]
    fn test_additive_fields_sum() {
        let rows = vec![
            row(10.0, 8.0, 6.0, 100.0, 20.0),
            row(30.0, 12.0, 10.0, 250.0, 30.0),
        ];
        let totals = aggregate(&rows);
        assert_eq!(totals.total_orders, 40.0);
        assert_eq!(totals.orders_confirmed, 20.0);
        assert_eq!(totals.delivered_orders, 16.0);
        assert_eq!(totals.total_revenue, 350.0);
        assert_eq!(totals.total_ads, 50.0);
        assert_eq!(totals.profit, 300.0);
    }

    #[test]
    fn test_efficiency_ratios_from_sums() {
        let rows = vec![
            row(10.0, 8.0, 5.0, 100.0, 20.0),
            row(10.0, 8.0, 5.0, 100.0, 30.0),
        ];
        let totals = aggregate(&rows);
        assert_eq!(totals.cpa, Some(50.0 / 20.0));
        assert_eq!(totals.cpad, Some(50.0 / 10.0));
    }

    #[test]
    fn test_empty_rows_yield_undefined_ratios() {
        let totals = aggregate(&[]);
        assert_eq!(totals.confirmation_rate, 0.0);
        assert_eq!(totals.margin, 0.0);
        assert_eq!(totals.cpa, None);
        assert_eq!(totals.cpad, None);
        assert_eq!(totals.cpd, None);
    }

    #[test]
    fn test_totals_over_totals_matches_flat_aggregation() {
        let rows_a = vec![row(20.0, 10.0, 4.0, 200.0, 40.0)];
        let rows_b = vec![row(5.0, 5.0, 3.0, 90.0, 10.0), row(15.0, 9.0, 2.0, 60.0, 5.0)];

        let block_a = aggregate(&rows_a);
        let block_b = aggregate(&rows_b);
        let combined = aggregate_totals([&block_a, &block_b]);

        let all_rows: Vec<AnalysisRow> =
            rows_a.into_iter().chain(rows_b.into_iter()).collect();
        let flat = aggregate(&all_rows);

        assert_eq!(combined, flat);
    }
}
