//! Shared dashboard pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load dataset once -> filter -> every breakdown + trend + headline stats
//!
//! The records are loaded once per process and every view is a pure function
//! over the same immutable slice. A filter change rebuilds `DashboardData`
//! wholesale; nothing is patched in place.

use crate::agg;
use crate::agg::{OverviewStats, TrendSeries};
use crate::data::dataset::{self, LoadedDataset};
use crate::data::sample;
use crate::domain::{DashConfig, DataSource, FilterSpec, NamedValue, SalesRecord};
use crate::error::AppError;
use serde::Serialize;

/// All chart-ready outputs for one filter state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub stats: OverviewStats,
    pub ship_mode_sales: Vec<NamedValue>,
    pub segment_sales: Vec<NamedValue>,
    pub region_sales: Vec<NamedValue>,
    pub category_avg_profit: Vec<NamedValue>,
    pub discount_profit: Vec<NamedValue>,
    pub trend: TrendSeries,
    /// Records surviving the filter (count only; the slices above are derived
    /// from them and the raw records stay with the caller).
    pub filtered_count: usize,
}

/// Compute every dashboard view from `records` under `filters`.
pub fn build_dashboard(records: &[SalesRecord], filters: &FilterSpec) -> DashboardData {
    let filtered = agg::filter_records(records, filters);

    DashboardData {
        stats: agg::overview_stats(&filtered),
        ship_mode_sales: agg::sales_by_ship_mode(&filtered),
        segment_sales: agg::sales_by_segment(&filtered),
        region_sales: agg::sales_by_region(&filtered),
        category_avg_profit: agg::avg_profit_by_category(&filtered),
        discount_profit: agg::profit_by_discount_band(&filtered),
        trend: agg::trend_series(&filtered),
        filtered_count: filtered.len(),
    }
}

/// Load the dataset named by `config.source`.
///
/// A load or parse failure is a normal, non-fatal state for the dashboard: the
/// caller receives an empty record set plus a diagnostic to surface, and every
/// aggregate degrades to its empty shape.
pub fn load_records_or_empty(config: &DashConfig) -> (Vec<SalesRecord>, LoadReport) {
    match load_records(config) {
        Ok(loaded) => {
            let diagnostic = if loaded.rows_skipped > 0 {
                Some(format!(
                    "Skipped {} malformed record(s) out of {}.",
                    loaded.rows_skipped, loaded.rows_read
                ))
            } else {
                None
            };
            (
                loaded.records,
                LoadReport {
                    rows_read: loaded.rows_read,
                    rows_skipped: loaded.rows_skipped,
                    diagnostic,
                },
            )
        }
        Err(err) => (
            Vec::new(),
            LoadReport {
                rows_read: 0,
                rows_skipped: 0,
                diagnostic: Some(format!("Dataset unavailable: {err}")),
            },
        ),
    }
}

/// What happened during the load step, for status lines and report headers.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub diagnostic: Option<String>,
}

fn load_records(config: &DashConfig) -> Result<LoadedDataset, AppError> {
    match &config.source {
        DataSource::Path(path) => dataset::load_from_path(path),
        DataSource::Url(url) => dataset::fetch_from_url(url),
        DataSource::Sample { count, seed } => {
            Ok(LoadedDataset::clean(sample::generate_records(*count, *seed)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::test_support::record_on;

    #[test]
    fn dashboard_from_empty_records_has_empty_shapes() {
        let dash = build_dashboard(&[], &FilterSpec::default());
        assert_eq!(dash.filtered_count, 0);
        assert!(dash.ship_mode_sales.is_empty());
        assert_eq!(dash.discount_profit.len(), 5);
        assert_eq!(dash.trend.monthly.len(), 12);
        assert_eq!(dash.trend.quarterly.len(), 4);
        assert!(dash.trend.yearly.is_empty());
    }

    #[test]
    fn filter_change_rebuilds_consistent_views() {
        let records = vec![
            record_on(42005.0, "Technology", "West", 100.0, 10.0),
            record_on(42370.0, "Furniture", "East", 50.0, 5.0),
        ];
        let all = build_dashboard(&records, &FilterSpec::default());
        assert_eq!(all.filtered_count, 2);
        assert_eq!(all.trend.yearly.len(), 2);

        let west_only = build_dashboard(
            &records,
            &FilterSpec {
                region: Some("West".to_string()),
                ..FilterSpec::default()
            },
        );
        assert_eq!(west_only.filtered_count, 1);
        assert_eq!(west_only.stats.total_sales, 100.0);
        assert_eq!(west_only.trend.yearly.len(), 1);
        // The unfiltered dashboard is untouched by the rebuild.
        assert_eq!(all.stats.total_sales, 150.0);
    }

    #[test]
    fn sample_source_loads_without_a_file() {
        let config = DashConfig {
            source: DataSource::Sample { count: 50, seed: 7 },
            filters: FilterSpec::default(),
            granularity: crate::domain::Granularity::Monthly,
            export_csv: None,
            export_json: None,
        };
        let (records, report) = load_records_or_empty(&config);
        assert_eq!(records.len(), 50);
        assert!(report.diagnostic.is_none());
    }

    #[test]
    fn missing_file_degrades_to_empty_with_diagnostic() {
        let config = DashConfig {
            source: DataSource::Path("does-not-exist.json".into()),
            filters: FilterSpec::default(),
            granularity: crate::domain::Granularity::Monthly,
            export_csv: None,
            export_json: None,
        };
        let (records, report) = load_records_or_empty(&config);
        assert!(records.is_empty());
        assert!(report.diagnostic.is_some());
    }
}
