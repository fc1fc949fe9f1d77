//! Time-series utilities used by the orchestrator.
//!
//! Modules include:
//! - `stats`: mean, sample standard deviation and Pearson correlation over slices
//! - `indicators`: trailing SMA and volatility for one series
//! - `resample`: bucket one series onto a fixed grid with forward-fill
//! - `align`: join several resampled series and trim the incomplete prefix
//! - `correlation`: pairwise matrix and rolling pair correlation
//! - `infer`: estimate a series' sampling cadence
/// Multi-series alignment onto a shared grid.
pub mod align;
/// Pairwise and rolling correlation over aligned tables.
pub mod correlation;
/// Trailing-window indicators for a single series.
pub mod indicators;
/// Cadence inference.
pub mod infer;
/// Grid bucketing with forward-fill.
pub mod resample;
/// Slice statistics.
pub mod stats;
