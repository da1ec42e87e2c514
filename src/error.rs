use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("Binary content in {0}, no text to extract")]
    NotText(PathBuf),
    #[error("File too large: {0}")]
    TooLarge(PathBuf),
}
impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}
