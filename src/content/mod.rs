pub mod catalog;
#[cfg(feature = "network")]
pub mod remote;
pub mod types;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or refreshing the content catalog. None of these
/// are fatal to the app; screens render their empty states instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content collection '{name}'")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("bundled content collection '{0}' is missing")]
    MissingAsset(String),
    #[cfg(feature = "network")]
    #[error("content download failed")]
    Fetch(#[source] reqwest::Error),
    #[cfg(feature = "network")]
    #[error("no content_url configured")]
    NoRemoteUrl,
}
