use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the coinscope workspace.
///
/// Covers missing data from the series store, unknown or invalid correlation
/// requests, argument validation, store-tagged failures and deadlines.
/// Warm-up gaps and zero-variance correlations are values, not errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoinscopeError {
    /// The series store holds no observations for the asset.
    #[error("no data for asset: {asset}")]
    NoData {
        /// Asset identifier that produced no observations.
        asset: String,
    },

    /// A correlation request named an asset that is not a column of the table.
    #[error("unknown asset: {asset}")]
    UnknownAsset {
        /// Asset identifier that was requested.
        asset: String,
    },

    /// A pair correlation request named the same asset twice.
    #[error("invalid pair: {asset} paired with itself")]
    InvalidPair {
        /// Asset identifier used on both sides of the pair.
        asset: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data.
    #[error("data issue: {0}")]
    Data(String),

    /// An individual store call failed.
    #[error("{store} failed: {msg}")]
    Store {
        /// Store name that failed.
        store: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual store call exceeded the configured timeout.
    #[error("store timed out: {asset} via {store}")]
    StoreTimeout {
        /// Store name that timed out.
        store: String,
        /// Asset being fetched.
        asset: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Operation label for which the request timed out.
        capability: String,
    },

    /// Writing a rendered artifact failed.
    #[error("io error: {0}")]
    Io(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CoinscopeError {
    /// Helper: build a `NoData` error for an asset.
    pub fn no_data(asset: impl Into<String>) -> Self {
        Self::NoData {
            asset: asset.into(),
        }
    }

    /// Helper: build an `UnknownAsset` error for an asset.
    pub fn unknown_asset(asset: impl Into<String>) -> Self {
        Self::UnknownAsset {
            asset: asset.into(),
        }
    }

    /// Helper: build a `Store` error with the store name and message.
    pub fn store(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Store {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `StoreTimeout` error.
    pub fn store_timeout(store: impl Into<String>, asset: impl Into<String>) -> Self {
        Self::StoreTimeout {
            store: store.into(),
            asset: asset.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for the `NoData` condition.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// Asset identifier carried by asset-scoped variants, if any.
    #[must_use]
    pub fn asset(&self) -> Option<&str> {
        match self {
            Self::NoData { asset }
            | Self::UnknownAsset { asset }
            | Self::InvalidPair { asset }
            | Self::StoreTimeout { asset, .. } => Some(asset),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CoinscopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
