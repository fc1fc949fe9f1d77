//! Configuration types shared by the engine and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Trailing window lengths used by single-series indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorWindows {
    /// Short simple moving average window.
    pub short: usize,
    /// Long simple moving average window.
    pub long: usize,
    /// Rolling standard deviation window.
    pub volatility: usize,
}

impl IndicatorWindows {
    /// Build a window set.
    #[must_use]
    pub const fn new(short: usize, long: usize, volatility: usize) -> Self {
        Self {
            short,
            long,
            volatility,
        }
    }

    /// True when every window is at least one sample wide.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.short >= 1 && self.long >= 1 && self.volatility >= 1
    }
}

impl Default for IndicatorWindows {
    fn default() -> Self {
        Self::new(10, 50, 20)
    }
}

/// Global configuration for the `Coinscope` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Windows for moving averages and volatility.
    pub windows: IndicatorWindows,
    /// Number of most recent observations fetched per asset for indicator analysis.
    pub history_limit: usize,
    /// Number of most recent observations fetched per asset for alignment and correlation.
    pub correlation_limit: usize,
    /// Grid step used to align assets. `None` infers it from observed cadence.
    pub grid_step: Option<Duration>,
    /// Window for rolling pair correlation.
    pub rolling_window: usize,
    /// Timeout for individual store calls.
    pub store_timeout: Duration,
    /// Optional overall deadline for fan-out operations over many assets.
    pub request_timeout: Option<Duration>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            windows: IndicatorWindows::default(),
            history_limit: 1000,
            correlation_limit: 500,
            grid_step: Some(Duration::from_secs(120)),
            rolling_window: 50,
            store_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
