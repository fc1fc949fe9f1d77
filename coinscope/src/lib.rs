//! Coinscope turns stored price snapshots into analysis artifacts.
//!
//! Overview
//! - Reads per-asset history through a [`SeriesStore`] supplied to the builder.
//! - Computes trailing indicators (short/long SMA, rolling volatility) per asset.
//! - Aligns several assets onto one time grid, forward-filling gaps and flagging
//!   stale cells, then computes pairwise and rolling Pearson correlation.
//! - Hands results to a [`ChartSink`] for rendering.
//!
//! Key behaviors and trade-offs
//! - Batch indicator analysis isolates failures: a missing or failing asset is
//!   recorded as a warning and the other assets still complete.
//! - Alignment is fail-fast: one asset failing to load fails the whole table,
//!   because a correlation over a partial asset set would be misleading.
//! - Warm-up gaps are `None` and zero-variance correlations are
//!   `Correlation::Undefined`; neither is an error.
//! - Every store call is bounded by `store_timeout`; fan-out operations can be
//!   bounded by an overall `request_timeout`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use coinscope::{AssetId, Coinscope, JsonFileSink, ChartSink, Artifact};
//!
//! let cs = Coinscope::builder()
//!     .store(store)
//!     .rolling_window(30)
//!     .build()?;
//!
//! let assets = [AssetId::new("bitcoin")?, AssetId::new("ethereum")?];
//! let report = cs.correlation_report(&assets, None).await?;
//!
//! let sink = JsonFileSink::new("outputs");
//! sink.render("Coin correlation", &Artifact::Matrix(&report.matrix))?;
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod analysis;
pub(crate) mod core;
mod present;

pub use analysis::batch::AnalyzeBuilder;
pub use crate::core::{Coinscope, CoinscopeBuilder};
pub use present::{Artifact, ChartSink, JsonFileSink};

pub use coinscope_core::{
    AlignedRow, AlignedTable, AnalysisConfig, AnalysisReport, AssetId, AssetWarning, Cell,
    CoinscopeError, Correlation, CorrelationMatrix, CorrelationReport, DeviationSummary,
    HistoryPage, IndicatorPoint, IndicatorSeries, IndicatorWindows, Observation, RollingCorrelation,
    HistorySlice, RollingPoint, Series, SeriesStore,
};
