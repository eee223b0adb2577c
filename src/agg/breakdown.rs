//! Dimension breakdowns: single-pass sums keyed by a record field.
//!
//! Bucket ordering is part of each function's contract:
//!
//! - ship mode and region keep first-seen insertion order (pie/bar slices
//!   stay where the dataset puts them)
//! - segment sorts alphabetically
//! - discount bands are a fixed 5-slot layout that never drops a bucket

use crate::domain::{NamedValue, SalesRecord};

/// Inclusive-lower discount band edges with their display labels.
///
/// The last band is closed on both ends so a full 100% discount still lands
/// in a bucket; all others are half-open `[lo, hi)`.
pub const DISCOUNT_BANDS: [(&str, f64, f64); 5] = [
    ("0.0 - 0.2", 0.0, 0.2),
    ("0.2 - 0.4", 0.2, 0.4),
    ("0.4 - 0.6", 0.4, 0.6),
    ("0.6 - 0.8", 0.6, 0.8),
    ("0.8 - 1.0", 0.8, 1.0),
];

/// Total sales per ship mode, buckets in first-seen order.
pub fn sales_by_ship_mode(records: &[SalesRecord]) -> Vec<NamedValue> {
    sum_by(records, |r| &r.ship_mode, |r| r.sales)
}

/// Total sales per customer segment, buckets sorted alphabetically.
pub fn sales_by_segment(records: &[SalesRecord]) -> Vec<NamedValue> {
    let mut out = sum_by(records, |r| &r.segment, |r| r.sales);
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// Total sales per region, buckets in first-seen order.
pub fn sales_by_region(records: &[SalesRecord]) -> Vec<NamedValue> {
    sum_by(records, |r| &r.region, |r| r.sales)
}

/// Average profit per transaction, keyed by category.
///
/// Buckets only exist once a record has been seen, so the count divisor is
/// always at least 1.
pub fn avg_profit_by_category(records: &[SalesRecord]) -> Vec<NamedValue> {
    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for record in records {
        match sums.iter_mut().find(|(name, _, _)| *name == record.category) {
            Some((_, sum, count)) => {
                *sum += record.profit;
                *count += 1;
            }
            None => sums.push((record.category.clone(), record.profit, 1)),
        }
    }

    sums.into_iter()
        .map(|(name, sum, count)| NamedValue::new(name, sum / count as f64))
        .collect()
}

/// Profit summed into the five fixed discount bands.
///
/// Always yields exactly 5 buckets; bands without contributing records stay
/// at 0. Profit may be negative, and so may a band total.
pub fn profit_by_discount_band(records: &[SalesRecord]) -> Vec<NamedValue> {
    let mut bands: Vec<NamedValue> = DISCOUNT_BANDS
        .iter()
        .map(|(label, _, _)| NamedValue::new(*label, 0.0))
        .collect();

    for record in records {
        if let Some(idx) = band_index(record.discount) {
            bands[idx].value += record.profit;
        }
    }

    bands
}

fn band_index(discount: f64) -> Option<usize> {
    DISCOUNT_BANDS.iter().position(|&(_, lo, hi)| {
        if hi >= 1.0 {
            discount >= lo && discount <= hi
        } else {
            discount >= lo && discount < hi
        }
    })
}

/// Generic first-seen-order sum keyed by a string field.
fn sum_by<'a>(
    records: &'a [SalesRecord],
    key: impl Fn(&'a SalesRecord) -> &'a str,
    metric: impl Fn(&SalesRecord) -> f64,
) -> Vec<NamedValue> {
    let mut out: Vec<NamedValue> = Vec::new();
    for record in records {
        let name = key(record);
        match out.iter_mut().find(|bucket| bucket.name == name) {
            Some(bucket) => bucket.value += metric(record),
            None => out.push(NamedValue::new(name, metric(record))),
        }
    }
    out
}
