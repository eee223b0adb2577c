//! Calendar trend series at four granularities.
//!
//! All four series are computed eagerly from the same filtered slice so a
//! front-end can switch granularity as a pure selection. Only a change to the
//! filtered input warrants recomputing, and then all four recompute together.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::dates::{MONTH_NAMES, decode_serial};
use crate::domain::{Granularity, PeriodTotals, SalesRecord};

/// Sales/profit sums per period, one vector per granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// One bucket per distinct year present, ascending.
    pub yearly: Vec<PeriodTotals>,
    /// Fixed 12 buckets `Jan..Dec`; all years fold into the same 12.
    pub monthly: Vec<PeriodTotals>,
    /// Dynamic `"<year>-W<n>"` buckets in first-seen order.
    pub weekly: Vec<PeriodTotals>,
    /// Fixed 4 buckets `Q1..Q4`, year-independent.
    pub quarterly: Vec<PeriodTotals>,
}

impl TrendSeries {
    /// Select one granularity's series without recomputing anything.
    pub fn select(&self, granularity: Granularity) -> &[PeriodTotals] {
        match granularity {
            Granularity::Yearly => &self.yearly,
            Granularity::Monthly => &self.monthly,
            Granularity::Weekly => &self.weekly,
            Granularity::Quarterly => &self.quarterly,
        }
    }
}

/// Build all four trend series from `records`.
pub fn trend_series(records: &[SalesRecord]) -> TrendSeries {
    TrendSeries {
        yearly: group_by_year(records),
        monthly: group_by_month(records),
        weekly: group_by_week(records),
        quarterly: group_by_quarter(records),
    }
}

fn group_by_year(records: &[SalesRecord]) -> Vec<PeriodTotals> {
    let mut out: Vec<(i32, PeriodTotals)> = Vec::new();
    for record in records {
        let year = decode_serial(record.order_date).year();
        match out.iter_mut().find(|(y, _)| *y == year) {
            Some((_, bucket)) => bucket.add(record),
            None => {
                let mut bucket = PeriodTotals::new(year.to_string());
                bucket.add(record);
                out.push((year, bucket));
            }
        }
    }
    out.sort_by_key(|(year, _)| *year);
    out.into_iter().map(|(_, bucket)| bucket).collect()
}

fn group_by_month(records: &[SalesRecord]) -> Vec<PeriodTotals> {
    let mut out: Vec<PeriodTotals> = MONTH_NAMES.iter().map(|m| PeriodTotals::new(*m)).collect();
    for record in records {
        let month0 = decode_serial(record.order_date).month0() as usize;
        out[month0].add(record);
    }
    out
}

fn group_by_week(records: &[SalesRecord]) -> Vec<PeriodTotals> {
    let mut out: Vec<PeriodTotals> = Vec::new();
    for record in records {
        let date = decode_serial(record.order_date);
        // Approximate week-of-month: days 1-7 are W1, 8-14 W2, ... 29-31 W5.
        // Deliberately not ISO weeks; the chart labels group by month slot.
        let week = format!("{}-W{}", date.year(), date.day().div_ceil(7));
        match out.iter_mut().find(|bucket| bucket.period == week) {
            Some(bucket) => bucket.add(record),
            None => {
                let mut bucket = PeriodTotals::new(week);
                bucket.add(record);
                out.push(bucket);
            }
        }
    }
    out
}

fn group_by_quarter(records: &[SalesRecord]) -> Vec<PeriodTotals> {
    let mut out: Vec<PeriodTotals> = (1..=4).map(|q| PeriodTotals::new(format!("Q{q}"))).collect();
    for record in records {
        let quarter = decode_serial(record.order_date).month0() as usize / 3;
        out[quarter].add(record);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::test_support::record_on;
    use crate::domain::SalesRecord;

    // Handy serials: 42005 = 2015-01-01, 42036 = 2015-02-01, 42370 = 2016-01-01.
    fn on(serial: f64, sales: f64, profit: f64) -> SalesRecord {
        record_on(serial, "Technology", "West", sales, profit)
    }

    #[test]
    fn monthly_always_has_twelve_buckets() {
        let series = trend_series(&[]);
        assert_eq!(series.monthly.len(), 12);
        assert_eq!(series.monthly[0].period, "Jan");
        assert_eq!(series.monthly[11].period, "Dec");
        assert!(series.monthly.iter().all(|b| b.sales == 0.0 && b.profit == 0.0));
    }

    #[test]
    fn quarterly_always_has_four_buckets() {
        let series = trend_series(&[]);
        let periods: Vec<&str> = series.quarterly.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn months_fold_across_years() {
        let records = vec![
            on(42005.0, 10.0, 1.0), // Jan 2015
            on(42370.0, 20.0, 2.0), // Jan 2016
        ];
        let series = trend_series(&records);
        assert_eq!(series.monthly[0].sales, 30.0);
        assert_eq!(series.monthly[0].profit, 3.0);
        assert!(series.monthly[1..].iter().all(|b| b.sales == 0.0));
    }

    #[test]
    fn yearly_buckets_sort_ascending() {
        let records = vec![
            on(42370.0, 5.0, 0.5),  // 2016
            on(42005.0, 10.0, 1.0), // 2015
            on(42005.0, 2.0, 0.2),  // 2015
        ];
        let series = trend_series(&records);
        assert_eq!(series.yearly.len(), 2);
        assert_eq!(series.yearly[0].period, "2015");
        assert_eq!(series.yearly[0].sales, 12.0);
        assert_eq!(series.yearly[1].period, "2016");
    }

    #[test]
    fn weekly_labels_use_day_of_month_sevenths() {
        let records = vec![
            on(42005.0, 1.0, 0.0),  // 2015-01-01 -> W1
            on(42012.0, 2.0, 0.0),  // 2015-01-08 -> W2
            on(42035.0, 4.0, 0.0),  // 2015-01-31 -> W5
            on(42011.0, 8.0, 0.0),  // 2015-01-07 -> W1 again
        ];
        let series = trend_series(&records);
        let periods: Vec<&str> = series.weekly.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(periods, vec!["2015-W1", "2015-W2", "2015-W5"]);
        assert_eq!(series.weekly[0].sales, 9.0);
    }

    #[test]
    fn quarters_split_on_month_thirds() {
        let records = vec![
            on(42064.0, 1.0, 0.0), // 2015-03-01 -> Q1
            on(42095.0, 2.0, 0.0), // 2015-04-01 -> Q2
            on(42339.0, 4.0, 0.0), // 2015-12-01 -> Q4
        ];
        let series = trend_series(&records);
        assert_eq!(series.quarterly[0].sales, 1.0);
        assert_eq!(series.quarterly[1].sales, 2.0);
        assert_eq!(series.quarterly[2].sales, 0.0);
        assert_eq!(series.quarterly[3].sales, 4.0);
    }

    #[test]
    fn select_is_a_pure_view() {
        let records = vec![on(42005.0, 10.0, 1.0)];
        let series = trend_series(&records);
        assert_eq!(series.select(Granularity::Monthly).len(), 12);
        assert_eq!(series.select(Granularity::Yearly).len(), 1);
        // Selecting does not disturb the underlying series.
        assert_eq!(series.select(Granularity::Yearly), &series.yearly[..]);
    }
}
