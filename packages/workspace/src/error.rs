use mtt_common::CommonError;
use mtt_parser::LoadError;
use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: CommonError,
    },
}

impl ConvertError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
