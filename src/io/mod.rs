//! File exports of chart-ready series.

pub mod export;
