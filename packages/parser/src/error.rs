use std::path::PathBuf;
use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Fatal errors raised while reading the working directory
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Working directory does not exist or is not a directory: {0}")]
    MissingRoot(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn missing_root(path: impl Into<PathBuf>) -> Self {
        Self::MissingRoot(path.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
