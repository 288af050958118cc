use std::path::PathBuf;

use thiserror::Error;

/// Result alias for the data and export layers.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors surfaced to the user. Data-level oddities (short rows, missing
/// columns, unparseable numbers) are not errors: they degrade to NaN.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no dataset loaded")]
    NoDataset,
}

impl DashboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DashboardError::Io {
            path: path.into(),
            source,
        }
    }
}
