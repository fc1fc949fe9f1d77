//! Coinscope data model, configuration primitives and error taxonomy.
#![warn(missing_docs)]

mod asset;
mod config;
mod correlation;
mod error;
mod indicators;
mod reports;
mod series;
mod table;

pub use asset::AssetId;
pub use config::{AnalysisConfig, IndicatorWindows};
pub use correlation::{Correlation, CorrelationMatrix, RollingCorrelation, RollingPoint};
pub use error::CoinscopeError;
pub use indicators::{IndicatorPoint, IndicatorSeries};
pub use reports::{
    AnalysisReport, AssetWarning, CorrelationReport, DeviationSummary, HistoryPage,
};
pub use series::{Observation, Series};
pub use table::{AlignedRow, AlignedTable, Cell};
