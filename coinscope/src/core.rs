use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use coinscope_core::{AnalysisConfig, AssetId, CoinscopeError, IndicatorWindows, Series, SeriesStore};

/// Orchestrator that reads history from a series store and runs the analysis engine.
pub struct Coinscope {
    pub(crate) store: Arc<dyn SeriesStore>,
    pub(crate) cfg: AnalysisConfig,
}

/// Builder for constructing a `Coinscope` orchestrator with custom configuration.
pub struct CoinscopeBuilder {
    store: Option<Arc<dyn SeriesStore>>,
    cfg: AnalysisConfig,
}

impl Default for CoinscopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinscopeBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: SMA 10/50 and volatility 20 over the latest 1000 snapshots per
    /// asset; the latest 500 snapshots on a two-minute grid for correlation,
    /// with a rolling window of 50.
    /// A store must be registered via [`store`](Self::store).
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            cfg: AnalysisConfig::default(),
        }
    }

    /// Register the series store. Replaces any previously registered store.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: AnalysisConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the indicator windows.
    #[must_use]
    pub const fn windows(mut self, windows: IndicatorWindows) -> Self {
        self.cfg.windows = windows;
        self
    }

    /// Set the alignment grid step.
    ///
    /// Must be a whole number of seconds; validated when the grid is built.
    #[must_use]
    pub const fn grid_step(mut self, step: Duration) -> Self {
        self.cfg.grid_step = Some(step);
        self
    }

    /// Infer the alignment grid step from the data instead of using a fixed one.
    ///
    /// The coarsest per-asset cadence wins, so no asset is upsampled.
    #[must_use]
    pub const fn infer_grid_step(mut self) -> Self {
        self.cfg.grid_step = None;
        self
    }

    /// Number of most recent snapshots fetched per asset for indicators.
    #[must_use]
    pub const fn history_limit(mut self, limit: usize) -> Self {
        self.cfg.history_limit = limit;
        self
    }

    /// Number of most recent snapshots fetched per asset for alignment and correlation.
    #[must_use]
    pub const fn correlation_limit(mut self, limit: usize) -> Self {
        self.cfg.correlation_limit = limit;
        self
    }

    /// Window for rolling pair correlation.
    #[must_use]
    pub const fn rolling_window(mut self, window: usize) -> Self {
        self.cfg.rolling_window = window;
        self
    }

    /// Set the per-call store timeout.
    #[must_use]
    pub const fn store_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.store_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-out operations (batch analysis, alignment).
    ///
    /// When exceeded, returns a `RequestTimeout` error for the operation.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Coinscope` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no store has been registered or if any window or
    /// limit is zero.
    pub fn build(self) -> Result<Coinscope, CoinscopeError> {
        let Some(store) = self.store else {
            return Err(CoinscopeError::InvalidArg(
                "no store registered; add one via store(...)".to_string(),
            ));
        };
        if !self.cfg.windows.is_valid() {
            return Err(CoinscopeError::InvalidArg(format!(
                "indicator windows must be at least 1: {:?}",
                self.cfg.windows
            )));
        }
        for (label, value) in [
            ("history_limit", self.cfg.history_limit),
            ("correlation_limit", self.cfg.correlation_limit),
            ("rolling_window", self.cfg.rolling_window),
        ] {
            if value == 0 {
                return Err(CoinscopeError::InvalidArg(format!(
                    "{label} must be at least 1"
                )));
            }
        }

        Ok(Coinscope {
            store,
            cfg: self.cfg,
        })
    }
}

/// Attribute an untagged store error to the store that produced it.
///
/// Errors that already carry their origin, and `NoData`, pass through unchanged.
pub fn tag_err(store: &str, e: CoinscopeError) -> CoinscopeError {
    match e {
        e @ (CoinscopeError::NoData { .. }
        | CoinscopeError::Store { .. }
        | CoinscopeError::StoreTimeout { .. }
        | CoinscopeError::RequestTimeout { .. }) => e,
        other => CoinscopeError::Store {
            store: store.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Coinscope {
    /// Start building a new `Coinscope` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use coinscope::{Coinscope, IndicatorWindows};
    ///
    /// let cs = Coinscope::builder()
    ///     .store(Arc::new(MyStore::connect(uri)?))
    ///     .windows(IndicatorWindows::new(10, 50, 20))
    ///     .correlation_limit(500)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CoinscopeBuilder {
        CoinscopeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.cfg
    }

    /// Name of the registered store.
    #[must_use]
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Wrap a store future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinscope::core::store_call_with_timeout",
            skip(fut, asset),
            fields(
                store = store_name,
                asset = %asset,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn store_call_with_timeout<T, Fut>(
        store_name: &'static str,
        asset: &AssetId,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CoinscopeError>
    where
        Fut: core::future::Future<Output = Result<T, CoinscopeError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CoinscopeError::store_timeout(store_name, asset.as_str())))
    }

    /// Fetch the most recent `limit` observations for an asset.
    ///
    /// Behavior:
    /// - One store call, bounded by `store_timeout`.
    /// - Store errors other than `NoData` are tagged with the store name.
    /// - A store answering with an empty series is treated as `NoData`.
    ///
    /// # Errors
    /// `InvalidArg` for a zero limit, `NoData`, `StoreTimeout` or `Store`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinscope::core::fetch",
            skip(self, asset),
            fields(asset = %asset),
        )
    )]
    pub async fn fetch(&self, asset: &AssetId, limit: usize) -> Result<Series, CoinscopeError> {
        let limit = NonZeroUsize::new(limit)
            .ok_or_else(|| CoinscopeError::InvalidArg("fetch limit must be at least 1".into()))?;
        let name = self.store.name();
        let series = Self::store_call_with_timeout(
            name,
            asset,
            self.cfg.store_timeout,
            self.store.latest(asset, limit),
        )
        .await
        .map_err(|e| tag_err(name, e))?;

        if series.is_empty() {
            return Err(CoinscopeError::no_data(asset.as_str()));
        }
        Ok(series)
    }

    /// Run `fut` under the optional request-level deadline.
    pub(crate) async fn with_request_deadline<T, Fut>(
        &self,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, CoinscopeError>
    where
        Fut: core::future::Future<Output = T>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, fut)
                .await
                .map_err(|_| CoinscopeError::request_timeout(capability)),
            None => Ok(fut.await),
        }
    }
}
