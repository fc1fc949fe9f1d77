//! Re-export of the data model from `coinscope-types`.
// Consolidated so downstream crates can depend on `coinscope-core` only

pub use coinscope_types::{
    AlignedRow, AlignedTable, AnalysisConfig, AnalysisReport, AssetId, AssetWarning, Cell,
    CoinscopeError, Correlation, CorrelationMatrix, CorrelationReport, DeviationSummary,
    HistoryPage, IndicatorPoint, IndicatorSeries, IndicatorWindows, Observation, RollingCorrelation,
    RollingPoint, Series,
};
