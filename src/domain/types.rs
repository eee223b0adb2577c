//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while building dashboard views
//! - exported to JSON/CSV
//! - reloaded later for comparisons across dataset snapshots

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the retail transaction log, normalized from the dataset JSON.
///
/// `order_date` stays in its raw spreadsheet-serial form; decoding to a
/// calendar date happens at aggregation time via `crate::dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub order_date: f64,
    pub category: String,
    pub segment: String,
    pub region: String,
    pub ship_mode: String,
    pub sales: f64,
    pub profit: f64,
    pub discount: f64,
}

/// Equality constraints applied before aggregation.
///
/// `None` is the "All" sentinel: no constraint on that dimension. `year`
/// compares against the decoded order-date year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub region: Option<String>,
    pub year: Option<i32>,
}

impl FilterSpec {
    pub fn is_all(&self) -> bool {
        self.category.is_none() && self.region.is_none() && self.year.is_none()
    }
}

/// Calendar period width for the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Yearly,
    Monthly,
    Weekly,
    Quarterly,
}

impl Granularity {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Granularity::Yearly => "Yearly",
            Granularity::Monthly => "Monthly",
            Granularity::Weekly => "Weekly",
            Granularity::Quarterly => "Quarterly",
        }
    }

    /// Cycle order used by the TUI `g` key.
    pub fn next(self) -> Self {
        match self {
            Granularity::Yearly => Granularity::Monthly,
            Granularity::Monthly => Granularity::Weekly,
            Granularity::Weekly => Granularity::Quarterly,
            Granularity::Quarterly => Granularity::Yearly,
        }
    }
}

/// A single chart-ready bucket: a label plus one accumulated metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A calendar-period bucket carrying both sales and profit sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub period: String,
    pub sales: f64,
    pub profit: f64,
}

impl PeriodTotals {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            sales: 0.0,
            profit: 0.0,
        }
    }

    pub fn add(&mut self, record: &SalesRecord) {
        self.sales += record.sales;
        self.profit += record.profit;
    }
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local JSON file.
    Path(PathBuf),
    /// HTTP(S) endpoint serving the same JSON document.
    Url(String),
    /// Deterministic synthetic dataset (demo mode, no file needed).
    Sample { count: usize, seed: u64 },
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults and `SDASH_DATA`).
#[derive(Debug, Clone)]
pub struct DashConfig {
    pub source: DataSource,
    pub filters: FilterSpec,
    pub granularity: Granularity,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
