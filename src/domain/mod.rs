//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the normalized sales record (`SalesRecord`)
//! - filter state (`FilterSpec`) and trend granularity (`Granularity`)
//! - chart-ready bucket shapes (`NamedValue`, `PeriodTotals`)
//! - run configuration (`DashConfig`)

pub mod types;

pub use types::*;
