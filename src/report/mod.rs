//! Formatted terminal output for the `report` and `trend` subcommands.

use crate::app::pipeline::{DashboardData, LoadReport};
use crate::domain::{DashConfig, FilterSpec, Granularity, NamedValue, PeriodTotals};

pub mod format;

use self::format::{fmt_currency, fmt_currency_thousands, fmt_percent, fmt_thousands, truncate};

/// Format the full dashboard report: headline stats plus every breakdown.
pub fn format_report(dash: &DashboardData, load: &LoadReport, config: &DashConfig) -> String {
    let mut out = String::new();

    out.push_str("=== sdash - SuperStore Sales Dashboard ===\n");
    out.push_str(&format!("Filters: {}\n", describe_filters(&config.filters)));
    out.push_str(&format!(
        "Records: {} used of {} read",
        dash.filtered_count, load.rows_read
    ));
    if load.rows_skipped > 0 {
        out.push_str(&format!(" ({} skipped)", load.rows_skipped));
    }
    out.push('\n');

    out.push_str("\nOverview:\n");
    out.push_str(&format!(
        "- Total Sales    {}\n",
        fmt_currency_thousands(dash.stats.total_sales)
    ));
    out.push_str(&format!("- Total Orders   {}\n", dash.stats.orders));
    out.push_str(&format!(
        "- Total Profit   {}\n",
        fmt_currency_thousands(dash.stats.total_profit)
    ));
    out.push_str(&format!(
        "- Avg Discount   {}\n",
        fmt_percent(dash.stats.avg_discount)
    ));
    out.push_str(&format!(
        "- Avg Profit     {}\n",
        fmt_currency(dash.stats.avg_profit)
    ));
    out.push_str(&format!(
        "- Profit Margin  {}\n",
        fmt_percent(dash.stats.profit_margin)
    ));

    out.push_str("\nShip mode sales:\n");
    out.push_str(&format_value_table(&dash.ship_mode_sales, fmt_currency_thousands));

    out.push_str("\nSegment sales:\n");
    out.push_str(&format_value_table(&dash.segment_sales, fmt_currency_thousands));

    out.push_str("\nRegion sales:\n");
    out.push_str(&format_value_table(&dash.region_sales, fmt_currency_thousands));

    out.push_str("\nAvg profit per order by category:\n");
    out.push_str(&format_value_table(&dash.category_avg_profit, fmt_currency));

    out.push_str("\nProfit by discount band:\n");
    out.push_str(&format_value_table(&dash.discount_profit, fmt_currency_thousands));

    out.push('\n');
    out.push_str(&format_trend(dash, config.granularity));

    out
}

/// Format only the trend table for one granularity.
pub fn format_trend(dash: &DashboardData, granularity: Granularity) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} trend:\n", granularity.display_name()));
    out.push_str(&format_trend_table(dash.trend.select(granularity)));
    out
}

/// One line summarizing active filters, `All` for unconstrained dimensions.
pub fn describe_filters(filters: &FilterSpec) -> String {
    format!(
        "category={} | region={} | year={}",
        filters.category.as_deref().unwrap_or("All"),
        filters.region.as_deref().unwrap_or("All"),
        filters
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "All".to_string()),
    )
}

fn format_value_table(rows: &[NamedValue], fmt: fn(f64) -> String) -> String {
    if rows.is_empty() {
        return "  (no data)\n".to_string();
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("  {:<20} {:>10}\n", truncate(&row.name, 20), fmt(row.value)));
    }
    out
}

fn format_trend_table(rows: &[PeriodTotals]) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {:<10} {:>10} {:>10}\n", "period", "sales", "profit"));
    out.push_str(&format!("  {:-<10} {:-<10} {:-<10}\n", "", "", ""));
    for row in rows {
        out.push_str(&format!(
            "  {:<10} {:>10} {:>10}\n",
            row.period,
            fmt_thousands(row.sales),
            fmt_thousands(row.profit),
        ));
    }
    if rows.is_empty() {
        out.push_str("  (no data)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::test_support::record_on;
    use crate::app::pipeline::build_dashboard;
    use crate::domain::{DashConfig, DataSource};

    fn config() -> DashConfig {
        DashConfig {
            source: DataSource::Sample { count: 0, seed: 0 },
            filters: FilterSpec::default(),
            granularity: Granularity::Monthly,
            export_csv: None,
            export_json: None,
        }
    }

    #[test]
    fn report_includes_every_section() {
        let records = vec![
            record_on(42005.0, "Technology", "West", 2500.0, 250.0),
            record_on(42370.0, "Furniture", "East", 1000.0, -100.0),
        ];
        let dash = build_dashboard(&records, &FilterSpec::default());
        let text = format_report(&dash, &LoadReport::default(), &config());

        assert!(text.contains("Total Sales"));
        assert!(text.contains("$3.5K"));
        assert!(text.contains("Ship mode sales:"));
        assert!(text.contains("Standard Class"));
        assert!(text.contains("Profit by discount band:"));
        assert!(text.contains("0.8 - 1.0"));
        assert!(text.contains("Monthly trend:"));
        assert!(text.contains("Jan"));
    }

    #[test]
    fn empty_dashboard_renders_without_panicking() {
        let dash = build_dashboard(&[], &FilterSpec::default());
        let text = format_report(&dash, &LoadReport::default(), &config());
        assert!(text.contains("(no data)"));
        // Fixed-cardinality sections still render all buckets.
        assert!(text.contains("0.0 - 0.2"));
    }

    #[test]
    fn filter_description_uses_all_sentinel() {
        assert_eq!(
            describe_filters(&FilterSpec::default()),
            "category=All | region=All | year=All"
        );
        let spec = FilterSpec {
            category: Some("Technology".to_string()),
            region: None,
            year: Some(2017),
        };
        assert_eq!(
            describe_filters(&spec),
            "category=Technology | region=All | year=2017"
        );
    }
}
