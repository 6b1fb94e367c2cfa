//! Library error type.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid formatting in JSON file: {0}")]
    Json(#[from] serde_json::Error),

    /// Criteria document has the right syntax but the wrong shape.
    #[error("Invalid criteria: {0}")]
    Criteria(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
