//! Dataset acquisition: JSON load/fetch plus a synthetic fallback.

pub mod dataset;
pub mod sample;

pub use dataset::{LoadedDataset, fetch_from_url, load_from_path, parse_dataset};
pub use sample::generate_records;
