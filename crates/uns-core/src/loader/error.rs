//! Error type for resource loaders.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource file could not be read.
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The resource file is not a valid TOML document for the expected type.
    #[error("parse TOML {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// No entry point is registered under the resolved identifier.
    #[error("no entry point registered for {identifier}")]
    NotRegistered { identifier: String },
    /// Failure reported by a custom loader or entry point.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
