//! Record filtering and filter-option extraction.
//!
//! Filtering is a conjunction of equality constraints over category, region,
//! and decoded order-date year. A `None` constraint means "All" and matches
//! every record. Output preserves input order; records are never mutated.

use crate::dates::serial_year;
use crate::domain::{FilterSpec, SalesRecord};

/// Return the subsequence of `records` matching every constraint in `spec`.
///
/// An empty result is a valid outcome (e.g. a year with no orders) and flows
/// into the aggregators as an empty bucket set rather than an error.
pub fn filter_records(records: &[SalesRecord], spec: &FilterSpec) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect()
}

fn matches(record: &SalesRecord, spec: &FilterSpec) -> bool {
    let category_ok = spec
        .category
        .as_deref()
        .is_none_or(|c| record.category == c);
    let region_ok = spec.region.as_deref().is_none_or(|r| record.region == r);
    let year_ok = spec
        .year
        .is_none_or(|y| serial_year(record.order_date) == y);

    category_ok && region_ok && year_ok
}

/// Distinct category labels, sorted alphabetically.
pub fn distinct_categories(records: &[SalesRecord]) -> Vec<String> {
    distinct_sorted(records.iter().map(|r| r.category.clone()))
}

/// Distinct region labels, sorted alphabetically.
pub fn distinct_regions(records: &[SalesRecord]) -> Vec<String> {
    distinct_sorted(records.iter().map(|r| r.region.clone()))
}

/// Distinct order years, sorted ascending.
pub fn distinct_years(records: &[SalesRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| serial_year(r.order_date)).collect();
    years.sort_unstable();
    years.dedup();
    years
}

fn distinct_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = values.collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::test_support::{record, record_on};

    #[test]
    fn all_sentinel_returns_input_unchanged() {
        let records = vec![
            record("Technology", "West", 100.0, 10.0),
            record("Furniture", "East", 50.0, -5.0),
            record("Office Supplies", "South", 25.0, 2.5),
        ];
        let out = filter_records(&records, &FilterSpec::default());
        assert_eq!(out, records);
    }

    #[test]
    fn constraints_conjoin() {
        let records = vec![
            record("Technology", "West", 100.0, 10.0),
            record("Technology", "East", 60.0, 6.0),
            record("Furniture", "West", 50.0, -5.0),
        ];
        let spec = FilterSpec {
            category: Some("Technology".to_string()),
            region: Some("West".to_string()),
            year: None,
        };
        let out = filter_records(&records, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].region, "West");
    }

    #[test]
    fn year_constraint_uses_decoded_order_date() {
        let records = vec![
            record_on(42005.0, "Technology", "West", 10.0, 1.0), // 2015-01-01
            record_on(42370.0, "Technology", "West", 20.0, 2.0), // 2016-01-01
        ];
        let spec = FilterSpec {
            year: Some(2016),
            ..FilterSpec::default()
        };
        let out = filter_records(&records, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sales, 20.0);
    }

    #[test]
    fn unknown_filter_value_yields_empty_not_error() {
        let records = vec![record("Technology", "West", 100.0, 10.0)];
        let spec = FilterSpec {
            category: Some("Appliances".to_string()),
            ..FilterSpec::default()
        };
        assert!(filter_records(&records, &spec).is_empty());
    }

    #[test]
    fn distinct_values_are_sorted_and_deduped() {
        let records = vec![
            record("Technology", "West", 1.0, 0.0),
            record("Furniture", "East", 1.0, 0.0),
            record("Technology", "West", 1.0, 0.0),
        ];
        assert_eq!(distinct_categories(&records), vec!["Furniture", "Technology"]);
        assert_eq!(distinct_regions(&records), vec!["East", "West"]);
    }

    #[test]
    fn distinct_years_ascending() {
        let records = vec![
            record_on(43101.0, "Technology", "West", 1.0, 0.0), // 2018
            record_on(42005.0, "Technology", "West", 1.0, 0.0), // 2015
            record_on(42370.0, "Technology", "West", 1.0, 0.0), // 2016
        ];
        assert_eq!(distinct_years(&records), vec![2015, 2016, 2018]);
    }
}
