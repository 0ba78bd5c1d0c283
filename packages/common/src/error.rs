use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the file system layer shared across mtt crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CommonError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
