//! Headline stats for the dashboard's stat-card row.

use serde::{Deserialize, Serialize};

use crate::domain::SalesRecord;

/// Totals and ratios over the (filtered) record set.
///
/// All fields are zero for an empty slice; ratios guard their divisors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub orders: usize,
    pub total_sales: f64,
    pub total_profit: f64,
    /// Mean discount fraction across orders.
    pub avg_discount: f64,
    /// Mean profit per order.
    pub avg_profit: f64,
    /// Total profit over total sales.
    pub profit_margin: f64,
}

pub fn overview_stats(records: &[SalesRecord]) -> OverviewStats {
    if records.is_empty() {
        return OverviewStats::default();
    }

    let orders = records.len();
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let total_profit: f64 = records.iter().map(|r| r.profit).sum();
    let discount_sum: f64 = records.iter().map(|r| r.discount).sum();

    OverviewStats {
        orders,
        total_sales,
        total_profit,
        avg_discount: discount_sum / orders as f64,
        avg_profit: total_profit / orders as f64,
        profit_margin: if total_sales > 0.0 {
            total_profit / total_sales
        } else {
            0.0
        },
    }
}
