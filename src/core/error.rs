//! Error types for `CoursePlanner`

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the planning core and the catalog cache boundary
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The requested course code is not in the catalog
    #[error("I couldn't find {0} in this catalog.")]
    NotFound(String),

    /// The catalog cache file could not be read or written
    #[error("Catalog file {}: {source}", path.display())]
    CatalogIo {
        /// Path of the catalog cache
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog cache is not valid JSON of the expected shape
    #[error("Invalid catalog JSON: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

/// Convenience Result type using [`PlannerError`]
pub type Result<T> = std::result::Result<T, PlannerError>;
