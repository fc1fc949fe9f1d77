pub mod align;
pub mod batch;
pub mod correlation;
pub mod indicators;
pub mod stats;

use std::collections::HashSet;

use coinscope_core::{AssetId, CoinscopeError};

/// Reject an empty or duplicated asset list.
pub(crate) fn check_assets(assets: &[AssetId], what: &str) -> Result<(), CoinscopeError> {
    if assets.is_empty() {
        return Err(CoinscopeError::InvalidArg(format!(
            "no assets specified for {what}"
        )));
    }
    let mut seen = HashSet::new();
    for asset in assets {
        if !seen.insert(asset.as_str()) {
            return Err(CoinscopeError::InvalidArg(format!(
                "duplicate asset '{asset}' in {what} list"
            )));
        }
    }
    Ok(())
}
