//! Pure aggregation layer: records in, chart-ready buckets out.
//!
//! Every function here is a synchronous single-pass reduction over an
//! immutable record slice. Nothing in this module performs I/O or holds
//! state; the front-ends re-invoke these functions whenever filter state
//! changes and swap in the fresh output wholesale.

pub mod breakdown;
pub mod filter;
pub mod summary;
pub mod trend;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::SalesRecord;

    /// A record dated 2015-01-01 (serial 42005) with neutral defaults.
    pub fn record(category: &str, region: &str, sales: f64, profit: f64) -> SalesRecord {
        record_on(42005.0, category, region, sales, profit)
    }

    pub fn record_on(
        order_date: f64,
        category: &str,
        region: &str,
        sales: f64,
        profit: f64,
    ) -> SalesRecord {
        SalesRecord {
            order_date,
            category: category.to_string(),
            segment: "Consumer".to_string(),
            region: region.to_string(),
            ship_mode: "Standard Class".to_string(),
            sales,
            profit,
            discount: 0.0,
        }
    }
}

pub use breakdown::{
    DISCOUNT_BANDS, avg_profit_by_category, profit_by_discount_band, sales_by_region,
    sales_by_segment, sales_by_ship_mode,
};
pub use filter::{distinct_categories, distinct_regions, distinct_years, filter_records};
pub use summary::{OverviewStats, overview_stats};
pub use trend::{TrendSeries, trend_series};
