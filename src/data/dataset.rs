//! SuperStore dataset ingest and normalization.
//!
//! This module turns the exported JSON document into a clean `Vec<SalesRecord>`
//! that is safe to aggregate.
//!
//! Design goals:
//! - **Exact external field names** (`Order Date`, `Ship Mode`, ...) preserved
//!   for compatibility with the existing dataset file
//! - **Row-level validation**: skip bad rows, but count what happened
//! - **Deterministic behavior** (no hidden randomness)
//! - **Separation of concerns**: no aggregation logic here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::domain::SalesRecord;
use crate::error::AppError;

/// Top-level key the exporter writes the record array under.
pub const DATASET_KEY: &str = "SuperStore Sales";

/// Normalized records plus ingest accounting.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<SalesRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

impl LoadedDataset {
    /// Wrap records that need no validation (synthetic data).
    pub fn clean(records: Vec<SalesRecord>) -> Self {
        let rows_read = records.len();
        Self {
            records,
            rows_read,
            rows_skipped: 0,
        }
    }
}

/// Load and normalize a dataset JSON file.
pub fn load_from_path(path: &Path) -> Result<LoadedDataset, AppError> {
    let mut file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open dataset '{}': {e}", path.display()))
    })?;
    let mut body = String::new();
    file.read_to_string(&mut body).map_err(|e| {
        AppError::usage(format!("Failed to read dataset '{}': {e}", path.display()))
    })?;
    parse_dataset(&body)
}

/// Fetch and normalize the dataset from an HTTP(S) endpoint.
pub fn fetch_from_url(url: &str) -> Result<LoadedDataset, AppError> {
    let resp = reqwest::blocking::get(url)
        .map_err(|e| AppError::runtime(format!("Dataset request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::runtime(format!(
            "Dataset request failed with status {}.",
            resp.status()
        )));
    }

    let body = resp
        .text()
        .map_err(|e| AppError::runtime(format!("Failed to read dataset response: {e}")))?;
    parse_dataset(&body)
}

/// Parse the JSON document and normalize its rows.
///
/// The records live under `DATASET_KEY`; if that key is absent but the
/// document has exactly one top-level array, that array is used instead.
pub fn parse_dataset(body: &str) -> Result<LoadedDataset, AppError> {
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| AppError::usage(format!("Invalid dataset JSON: {e}")))?;

    let rows_value = match document.get(DATASET_KEY) {
        Some(v) => v,
        None => match document.values().next() {
            Some(v) if document.len() == 1 && v.is_array() => v,
            _ => {
                return Err(AppError::usage(format!(
                    "Dataset JSON is missing the '{DATASET_KEY}' key."
                )));
            }
        },
    };

    let raw_rows: Vec<RawRecord> = serde_json::from_value(rows_value.clone())
        .map_err(|e| AppError::usage(format!("Invalid dataset rows: {e}")))?;

    let rows_read = raw_rows.len();
    let mut records = Vec::with_capacity(rows_read);
    let mut rows_skipped = 0usize;

    for raw in raw_rows {
        match normalize_row(raw) {
            Some(record) => records.push(record),
            None => rows_skipped += 1,
        }
    }

    Ok(LoadedDataset {
        records,
        rows_read,
        rows_skipped,
    })
}

/// One raw row as exported; every field optional so a malformed row fails
/// normalization rather than the whole document parse.
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    #[serde(rename = "Order Date")]
    order_date: Option<f64>,
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Segment")]
    segment: Option<String>,
    #[serde(rename = "Region")]
    region: Option<String>,
    #[serde(rename = "Ship Mode")]
    ship_mode: Option<String>,
    #[serde(rename = "Sales")]
    sales: Option<f64>,
    #[serde(rename = "Profit")]
    profit: Option<f64>,
    #[serde(rename = "Discount")]
    discount: Option<f64>,
}

/// Rows missing a field or carrying non-finite numbers are dropped so every
/// downstream aggregate stays finite. Dropped rows are counted, not silently
/// ignored (see DESIGN.md for the validation policy).
fn normalize_row(raw: RawRecord) -> Option<SalesRecord> {
    let order_date = raw.order_date.filter(|v| v.is_finite())?;
    let sales = raw.sales.filter(|v| v.is_finite())?;
    let profit = raw.profit.filter(|v| v.is_finite())?;
    let discount = raw.discount.filter(|v| v.is_finite() && (0.0..=1.0).contains(v))?;

    Some(SalesRecord {
        order_date,
        category: raw.category?,
        segment: raw.segment?,
        region: raw.region?,
        ship_mode: raw.ship_mode?,
        sales,
        profit,
        discount,
    })
}
