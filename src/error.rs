use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl DumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DumpError::Io {
            path: path.into(),
            source,
        }
    }
}
