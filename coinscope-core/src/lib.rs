//! coinscope-core
//!
//! Core traits and the rolling statistics engine shared across coinscope.
//!
//! - `store`: the `SeriesStore` trait that supplies per-asset price history.
//! - `timeseries`: indicators, resampling, multi-series alignment and correlation.
//! - `types`: re-exports of the `coinscope-types` data model.
//!
//! The engine is pure: every function takes borrowed inputs and returns new
//! values, so a `Series` can be reused across any number of computations.
#![warn(missing_docs)]

/// Series store adapter trait.
pub mod store;
/// Time-series utilities: indicators, resampling, alignment, correlation.
pub mod timeseries;
pub mod types;

pub use store::{HistorySlice, SeriesStore};
pub use timeseries::align::align;
pub use timeseries::correlation::{pairwise_matrix, rolling_pair_correlation};
pub use timeseries::indicators::{compute_indicators, rolling_std, sma};
pub use timeseries::infer::estimate_step_seconds;
pub use timeseries::resample::{MAX_GRID_POINTS, ResampledPoint, bucket_start, resample_series};
pub use timeseries::stats::{is_constant, mean, pearson, sample_std};
pub use types::*;
