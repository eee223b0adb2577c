//! Export dashboard series to CSV and JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts: CSV carries every bucket row, JSON carries the whole computed
//! dashboard in one document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::DashboardData;
use crate::error::AppError;

/// Write every bucket series to one CSV file.
///
/// Rows are `section,period/name,sales,profit` with the single-metric
/// breakdowns leaving `profit` empty (or `sales` empty for profit-valued
/// series).
pub fn write_dashboard_csv(path: &Path, dash: &DashboardData) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "section,name,sales,profit")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    let mut write_row = |section: &str, name: &str, sales: &str, profit: &str| {
        writeln!(file, "{section},{},{sales},{profit}", csv_field(name))
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))
    };

    for row in &dash.ship_mode_sales {
        write_row("ship_mode_sales", &row.name, &fmt_num(row.value), "")?;
    }
    for row in &dash.segment_sales {
        write_row("segment_sales", &row.name, &fmt_num(row.value), "")?;
    }
    for row in &dash.region_sales {
        write_row("region_sales", &row.name, &fmt_num(row.value), "")?;
    }
    for row in &dash.category_avg_profit {
        write_row("category_avg_profit", &row.name, "", &fmt_num(row.value))?;
    }
    for row in &dash.discount_profit {
        write_row("discount_profit", &row.name, "", &fmt_num(row.value))?;
    }

    let trend_sections = [
        ("trend_yearly", &dash.trend.yearly),
        ("trend_monthly", &dash.trend.monthly),
        ("trend_weekly", &dash.trend.weekly),
        ("trend_quarterly", &dash.trend.quarterly),
    ];
    for (section, rows) in trend_sections {
        for row in rows {
            write_row(section, &row.period, &fmt_num(row.sales), &fmt_num(row.profit))?;
        }
    }

    Ok(())
}

/// Write the whole computed dashboard as pretty JSON.
pub fn write_dashboard_json(path: &Path, dash: &DashboardData) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, dash)
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

fn fmt_num(value: f64) -> String {
    format!("{value:.4}")
}

/// Quote fields containing commas; labels like `"0.0 - 0.2"` stay plain.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::test_support::record_on;
    use crate::app::pipeline::build_dashboard;
    use crate::domain::FilterSpec;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("sales-dash-test-{name}"))
    }

    #[test]
    fn csv_export_round_trips_bucket_counts() {
        let records = vec![
            record_on(42005.0, "Technology", "West", 100.0, 10.0),
            record_on(42370.0, "Furniture", "East", 50.0, -5.0),
        ];
        let dash = build_dashboard(&records, &FilterSpec::default());

        let path = tmp_path("export.csv");
        write_dashboard_csv(&path, &dash).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        // header + 5 discount bands + 12 months + 4 quarters are always present
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "section,name,sales,profit");
        assert_eq!(lines.iter().filter(|l| l.starts_with("discount_profit")).count(), 5);
        assert_eq!(lines.iter().filter(|l| l.starts_with("trend_monthly")).count(), 12);
        assert_eq!(lines.iter().filter(|l| l.starts_with("trend_quarterly")).count(), 4);
    }

    #[test]
    fn json_export_is_parseable() {
        let records = vec![record_on(42005.0, "Technology", "West", 100.0, 10.0)];
        let dash = build_dashboard(&records, &FilterSpec::default());

        let path = tmp_path("export.json");
        write_dashboard_json(&path, &dash).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["discount_profit"].as_array().unwrap().len(), 5);
        assert_eq!(value["stats"]["orders"], 1);
    }

    #[test]
    fn csv_fields_with_commas_are_quoted() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
