use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use coinscope_core::{AssetId, CoinscopeError, Series, SeriesStore};

/// Instruction for how the store should answer for a given asset.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CoinscopeError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<AssetId, MockBehavior<Series>>,
    calls: HashMap<AssetId, Vec<usize>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `latest` calls for a specific asset.
    pub async fn set_behavior(&self, asset: AssetId, behavior: MockBehavior<Series>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(asset, behavior);
    }

    /// Number of `latest` calls made for an asset so far.
    pub async fn calls(&self, asset: &AssetId) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(asset).map_or(0, Vec::len)
    }

    /// Limits requested for an asset, in call order.
    pub async fn requested_limits(&self, asset: &AssetId) -> Vec<usize> {
        let guard = self.state.lock().await;
        guard.calls.get(asset).cloned().unwrap_or_default()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.calls.clear();
    }
}

/// A store that defers all behavior to an external controller.
///
/// Assets without a configured behavior answer `NoData`. `Return` values are
/// truncated to the requested limit like a real store would.
pub struct DynamicMockStore {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockStore {
    /// Create a new dynamic mock store and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn SeriesStore>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesStore>, controller)
    }
}

#[async_trait]
impl SeriesStore for DynamicMockStore {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn latest(&self, asset: &AssetId, limit: NonZeroUsize) -> Result<Series, CoinscopeError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .calls
                .entry(asset.clone())
                .or_default()
                .push(limit.get());
            guard.rules.get(asset).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series.tail(limit.get())),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(CoinscopeError::no_data(asset.as_str())),
        }
    }
}
