use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Unable to open dataset [{path}]: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Unable to create dataset [{path}]: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Dataset [{path}] has an unexpected column [{column}]")]
    UnexpectedColumn {
        path: PathBuf,
        column: String
    },
    #[error("Dataset [{path}] repeats column [{column}]")]
    DuplicateColumn {
        path: PathBuf,
        column: String
    },
    #[error("Dataset CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset IO error: {0}")]
    Io(#[from] std::io::Error)
}
