//! Start-up error types
//!
//! Only setup can fail. Once the tick loop is running nothing is fallible.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised before the first tick
#[derive(Error, Debug)]
pub enum SetupError {
    /// A required asset file does not exist
    #[error("asset not found: {}", path.display())]
    AssetMissing { path: PathBuf },

    /// A required asset exists but could not be read
    #[error("failed to read asset {}: {source}", path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required asset is not in the expected format
    #[error("asset {} is corrupt: {reason}", path.display())]
    AssetCorrupt { path: PathBuf, reason: String },

    /// Settings file could not be read
    #[error("failed to read settings {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid JSON for [`crate::Settings`]
    #[error("invalid settings {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
